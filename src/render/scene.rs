//! Draws one frame of the game.
use crate::core::game::Game;
use crate::render::renderer::Renderer;

pub fn level_label(level: u64) -> String {
    format!("Level: {}", level)
}

pub fn draw_game<R: Renderer>(game: &Game, renderer: &mut R) {
    let config = &game.config;
    renderer.clear(config.background_color);
    renderer.draw_rect(game.player.bounding_box(), config.player_color);
    renderer.draw_rect(game.gem.bounding_box(), config.gem_color);
    renderer.draw_text(
        &level_label(game.level),
        config.level_label_x,
        config.level_label_y,
        config.level_font_size,
        config.text_color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::*;

    use crate::config::GameConfig;
    use crate::core::collision::BoundingBox;
    use crate::render::renderer::DrawCommand;
    use crate::render::testing::ScriptedPlatform;

    #[test]
    fn draws_background_entities_and_label() {
        let game = Game::new(GameConfig::default());
        let mut platform = ScriptedPlatform::default();
        draw_game(&game, &mut platform);
        platform.present();

        assert_eq!(
            platform.frames,
            vec![vec![
                DrawCommand::Clear(Color::WHITE),
                DrawCommand::Rect(BoundingBox::new(40.0, 40.0, 30.0, 30.0), Color::RED),
                DrawCommand::Rect(BoundingBox::new(720.0, 720.0, 20.0, 20.0), Color::YELLOW),
                DrawCommand::Text {
                    text: "Level: 1".to_string(),
                    x: 10,
                    y: 10,
                    size: 36,
                    color: Color::BLACK,
                },
            ]]
        );
    }

    #[test]
    fn label_shows_current_level() {
        assert_eq!(level_label(1), "Level: 1");
        assert_eq!(level_label(42), "Level: 42");
    }
}
