//! Palm Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, HtmlVideoElement};

    use palm_pong::GameError;
    use palm_pong::error::Result;
    use palm_pong::hands::{HandResults, interpret};
    use palm_pong::platform::mediapipe::{create_hands, start_camera};
    use palm_pong::platform::{DomPresenter, element_by_id, viewport_size};
    use palm_pong::renderer::{RenderState, scene};
    use palm_pong::settings::Settings;
    use palm_pong::sim::{GameEvent, GameState, Surface, dispatch, update};
    use palm_pong::ui::Presenter;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        presenter: DomPresenter,
        render_state: Option<RenderState>,
        settings: Settings,
        fps_el: Option<Element>,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(state: GameState, presenter: DomPresenter, settings: Settings) -> Self {
            Self {
                state,
                presenter,
                render_state: None,
                settings,
                fps_el: None,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// One display frame: physics, then render, then HUD
        fn frame(&mut self, time: f64) {
            update(&mut self.state, &mut self.presenter);
            self.render();
            self.track_fps(time);
        }

        fn render(&mut self) {
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };
            let vertices = scene::build(&self.state);
            match render_state.render(&vertices) {
                Ok(()) => {}
                Err(GameError::Surface(wgpu::SurfaceError::Lost)) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(GameError::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {}", e),
            }
        }

        fn track_fps(&mut self, time: f64) {
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Oldest sample is the one about to be overwritten
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }

            if self.settings.show_fps {
                if let Some(el) = &self.fps_el {
                    el.set_text_content(Some(&format!("{} fps", self.fps)));
                }
            }
        }

        fn on_hand_results(&mut self, results: HandResults) {
            if let Some(event) = interpret(&results) {
                dispatch(&mut self.state, event, &mut self.presenter);
            }
        }

        fn retry(&mut self) {
            dispatch(&mut self.state, GameEvent::Retry, &mut self.presenter);
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.state.resize(width as f32, height as f32);
            if let Some(render_state) = self.render_state.as_mut() {
                render_state.resize(width, height);
            }
        }
    }

    pub async fn run() -> Result<()> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| GameError::Js(e.to_string()))?;

        log::info!("Palm Pong starting...");

        let window = web_sys::window().ok_or_else(|| GameError::Dom("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| GameError::Dom("no document".into()))?;

        let canvas: HtmlCanvasElement = element_by_id(&document, "gameCanvas")?;
        let video: HtmlVideoElement = element_by_id(&document, "webcam")?;

        let (width, height) = viewport_size(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        settings.save();
        video.set_hidden(!settings.show_preview);

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(Surface::new(width as f32, height as f32), seed);
        let presenter = DomPresenter::from_document(&document)?;
        let game = Rc::new(RefCell::new(Game::new(state, presenter, settings.clone())));
        game.borrow_mut().fps_el = document.get_element_by_id("fps");

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await?;
        game.borrow_mut().render_state = Some(render_state);

        setup_retry(game.clone());
        setup_resize(&canvas, game.clone());

        // Hand tracker feeds the state machine
        let hands = {
            let game = game.clone();
            create_hands(&settings.tracker, move |results| {
                game.borrow_mut().on_hand_results(results);
            })?
        };

        // Start game loop
        request_animation_frame(game.clone());

        log::info!("Palm Pong running!");

        if let Err(e) = start_camera(video, Rc::new(hands), &settings.camera).await {
            log::error!("{}", e);
            if let Some(overlay) = e.overlay() {
                game.borrow_mut().presenter.show_overlay(&overlay);
            }
        }

        Ok(())
    }

    fn setup_retry(game: Rc<RefCell<Game>>) {
        let handle = game.clone();
        game.borrow().presenter.on_retry(move || {
            handle.borrow_mut().retry();
        });
    }

    fn setup_resize(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = viewport_size(&window);
            canvas.set_width(width);
            canvas.set_height(height);
            game.borrow_mut().resize(width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Palm Pong (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let settings = palm_pong::Settings::load();
    log::info!(
        "Tracker options: {:?}, camera {}x{}",
        settings.tracker,
        settings.camera.width,
        settings.camera.height
    );

    headless::run_demo(42);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted session through the real simulation, with a synthetic hand
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use palm_pong::hands::{HAND_LANDMARKS, HandResults, Landmark, interpret};
    use palm_pong::renderer::scene;
    use palm_pong::sim::{GameEvent, GamePhase, GameState, Surface, dispatch, update};
    use palm_pong::ui::LogPresenter;

    const WIDTH: f32 = 800.0;
    const HEIGHT: f32 = 600.0;

    /// A hand whose landmarks all sit at normalized height `palm_y`
    fn hand_at(palm_y: f32) -> HandResults {
        HandResults {
            hands: vec![vec![
                Landmark {
                    x: 0.5,
                    y: palm_y,
                    z: 0.0
                };
                HAND_LANDMARKS
            ]],
        }
    }

    fn feed(state: &mut GameState, presenter: &mut LogPresenter, results: &HandResults) {
        if let Some(event) = interpret(results) {
            dispatch(state, event, presenter);
        }
    }

    pub fn run_demo(seed: u64) {
        let mut state = GameState::new(Surface::new(WIDTH, HEIGHT), seed);
        let mut presenter = LogPresenter::default();

        // Hand follows the ball
        for _ in 0..1200 {
            let palm_y = (state.ball.pos.y / HEIGHT).clamp(0.0, 1.0);
            feed(&mut state, &mut presenter, &hand_at(palm_y));
            update(&mut state, &mut presenter);
        }
        log::info!(
            "Tracking phase: score {}, speed x{:.2}",
            state.score,
            state.ball.speed
        );

        // Hand leaves the frame
        for _ in 0..30 {
            feed(&mut state, &mut presenter, &HandResults::default());
            update(&mut state, &mut presenter);
        }
        log::info!("Hand lost: phase {:?}", state.phase());

        // Hand parked at the bottom until the ball gets past
        let mut frames = 0;
        while state.phase() != GamePhase::GameOver && frames < 5000 {
            feed(&mut state, &mut presenter, &hand_at(0.95));
            update(&mut state, &mut presenter);
            frames += 1;
        }
        log::info!(
            "After {} frames: phase {:?}, score {}",
            frames,
            state.phase(),
            state.score
        );

        dispatch(&mut state, GameEvent::Retry, &mut presenter);
        let vertices = scene::build(&state);
        log::info!(
            "Retried: phase {:?}, score {}, {} vertices in frame",
            state.phase(),
            presenter.score,
            vertices.len()
        );
    }
}
