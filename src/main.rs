//! Brickout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlImageElement};

    use brickout::consts::*;
    use brickout::platform::input;
    use brickout::platform::raf::RafHandle;
    use brickout::renderer::{RenderState, shapes};
    use brickout::settings::Settings;
    use brickout::sim::{GamePhase, GameState, TickInput, tick};
    use brickout::ui;

    /// Path the background image is fetched from
    const BACKGROUND_PATH: &str = "assets/background.png";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        input: TickInput,
        settings: Settings,
        raf: RafHandle,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(settings: Settings) -> Self {
            Self {
                state: GameState::new(),
                render_state: None,
                input: TickInput::default(),
                settings,
                raf: RafHandle::new(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        fn track_fps(&mut self, time: f64) {
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let draw_background = self.settings.background;
            let vertices = shapes::scene(&self.state);
            if let Some(render_state) = self.render_state.as_mut() {
                match render_state.render(&vertices, draw_background) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Sync HUD text and screen-region visibility to the session state
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            set_text(&document, "score", &ui::score_text(&self.state));
            set_text(&document, "lives", &ui::lives_text(&self.state));
            set_text(&document, "level", &ui::level_text(&self.state));

            if self.settings.show_fps {
                set_text(&document, "fps", &format!("FPS: {}", self.fps));
            }

            let screens = ui::screens_for(self.state.phase);
            set_display(&document, "menu", screens.menu, "flex");
            set_display(&document, "gameCanvas", screens.canvas, "block");
            set_display(&document, "gameStats", screens.stats, "block");
            set_display(&document, "gameOverID", screens.game_over, "flex");

            if screens.game_over {
                set_text(
                    &document,
                    "gameOverTitle",
                    ui::terminal_heading(self.state.phase),
                );
                set_text(&document, "finalScore", &ui::final_score_text(&self.state));
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_display(document: &Document, id: &str, visible: bool, display: &str) {
        if let Some(el) = document.get_element_by_id(id)
            && let Some(el) = el.dyn_ref::<web_sys::HtmlElement>()
        {
            let value = if visible { display } else { "none" };
            let _ = el.style().set_property("display", value);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brickout starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fixed logical surface
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game::new(settings)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state =
            RenderState::new(surface, &adapter, CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32).await;
        game.borrow_mut().render_state = Some(render_state);

        // Fetch and decode the background off the critical path; frames
        // that run before it lands just skip the layer
        if game.borrow().settings.background {
            spawn_background_load(game.clone());
        }

        setup_input_handlers(game.clone());
        setup_buttons(game.clone());

        // Menu screen up until start is clicked
        game.borrow().update_hud();

        log::info!("Brickout ready");
    }

    fn spawn_background_load(game: Rc<RefCell<Game>>) {
        wasm_bindgen_futures::spawn_local(async move {
            match load_background_pixels(BACKGROUND_PATH).await {
                Ok((pixels, width, height)) => {
                    if let Some(render_state) = game.borrow_mut().render_state.as_mut() {
                        render_state.set_background(&pixels, width, height);
                    }
                    log::info!("Background ready ({}x{})", width, height);
                }
                Err(e) => log::warn!("Background image unavailable: {:?}", e),
            }
        });
    }

    /// Decode the background image into raw RGBA via a scratch 2d canvas
    async fn load_background_pixels(path: &str) -> Result<(Vec<u8>, u32, u32), JsValue> {
        let image = HtmlImageElement::new()?;
        image.set_src(path);
        wasm_bindgen_futures::JsFuture::from(image.decode()).await?;

        let width = image.natural_width();
        let height = image.natural_height();

        let document = web_sys::window()
            .ok_or("no window")?
            .document()
            .ok_or("no document")?;
        let scratch: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        scratch.set_width(width);
        scratch.set_height(height);
        let ctx: web_sys::CanvasRenderingContext2d = scratch
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;
        ctx.draw_image_with_html_image_element(&image, 0.0, 0.0)?;
        let data = ctx.get_image_data(0.0, 0.0, width as f64, height as f64)?;

        Ok((data.data().0, width, height))
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Key down sets a movement flag...
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(intent) = input::intent_for_key(&event.key()) {
                    input::apply_intent(&mut game.borrow_mut().input, intent, true);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // ...key up clears it again
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(intent) = input::intent_for_key(&event.key()) {
                    input::apply_intent(&mut game.borrow_mut().input, intent, false);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Start and restart are the same transition
        for id in ["startButton", "restartButton"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    start_session(&game);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    /// Menu/terminal screen to playing: reset the session and begin the loop
    fn start_session(game: &Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            // Drop any frame still pending from a previous session
            g.raf.cancel();
            g.state.start();
            g.input = TickInput::default();
            g.update_hud();
            log::info!("Session started");
        }
        schedule_frame(game.clone());
    }

    fn schedule_frame(game: Rc<RefCell<Game>>) {
        let raf = game.borrow().raf.clone();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        raf.schedule(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();
            let input = g.input;
            tick(&mut g.state, &input);
            g.track_fps(time);
            g.render();
            g.update_hud();
            g.state.phase == GamePhase::Playing
        };

        if keep_running {
            schedule_frame(game);
        } else {
            // The session ended inside this frame. Nothing further is
            // scheduled; cancel is a safe no-op if that ever changes.
            game.borrow().raf.cancel();
            log::info!("Frame loop stopped");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brickout (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the simulation without a display: serve a session and let it run
/// with an idle paddle until the session ends or the frame cap hits.
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use brickout::sim::{GamePhase, GameState, TickInput, tick};

    let mut state = GameState::new();
    state.start();

    let input = TickInput::default();
    let mut frames = 0u32;
    while state.phase == GamePhase::Playing && frames < 100_000 {
        tick(&mut state, &input);
        frames += 1;
    }

    println!(
        "headless run: {} frames, score {}, lives {}, level {}, phase {:?}",
        frames, state.score, state.lives, state.level, state.phase
    );
}
