mod backend;
mod config;
mod context;
mod error;
mod fsm;
mod gui;
mod input_system;
mod render;
mod sprite;
mod states;
mod words;

#[cfg(test)]
mod testing;

use backend::{SdlAssets, SdlScreen, TextCache};
use config::GameConfig;
use context::GameContext;
use fsm::StateMachine;
use input_system::{InputEvent, InputSystem};
use log::info;
use sdl2::pixels::Color;
use std::time::{Duration, Instant};

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::discover().map_err(|e| e.to_string())?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;
    let ttf_context = sdl2::ttf::init().map_err(|e| e.to_string())?;

    let window = video_subsystem
        .window(&config.window.title, config.window.width, config.window.height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    // Typed characters arrive as TextInput events
    video_subsystem.text_input().start();

    info!(
        "Window created: {}x{} at {} fps",
        config.window.width, config.window.height, config.window.fps
    );

    let mut assets = SdlAssets::new(&ttf_context, &texture_creator);
    let mut machine = StateMachine::new(GameContext::new(config.topics.clone()), config.assets.clone());
    machine.start(&mut assets)?;

    let input = InputSystem::new();
    let mut text_cache = TextCache::new();

    let [r, g, b] = config.window.background;
    let background = Color::RGB(r, g, b);
    let frame_budget = Duration::from_secs(1) / config.window.fps.max(1);

    'running: loop {
        let frame_start = Instant::now();

        for event in input.poll_events(&mut event_pump) {
            // Window close and Alt+F4 never reach the states
            if matches!(event, InputEvent::Quit) {
                break 'running;
            }
            machine.update(&event, &assets)?;
        }

        let mut screen = SdlScreen::new(&mut canvas, &assets, &mut text_cache);
        screen.clear(background);
        machine.render(&mut screen).map_err(|e| e.to_string())?;
        screen.present();

        // Cap framerate
        if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    info!("Quit requested, shutting down");
    Ok(())
}
