//! FRP Pong entry point
//!
//! On the web: wires key listeners and a fixed-interval timer into one
//! `EventStream` and renders each state into the page. Natively: runs a
//! headless game with an idle player and logs the scoreboard.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use frp_pong::Settings;
    use frp_pong::input::{EventStream, Key, KeyAction, KeyEvent};
    use frp_pong::view::{DomView, Frame, View};

    /// Game instance shared by the listeners
    struct Game {
        stream: EventStream,
        view: DomView,
        /// Timer emissions so far
        elapsed: u64,
    }

    impl Game {
        /// Timer callback: fold one tick and render the result
        fn on_timer(&mut self) {
            let elapsed = self.elapsed;
            self.elapsed += 1;
            let frame = Frame::from_state(self.stream.on_timer(elapsed));
            self.view.render(&frame);
        }

        fn on_key(&mut self, event: &KeyboardEvent) {
            let (Some(action), Some(key)) = (
                KeyAction::from_event_type(&event.type_()),
                Key::from_code(&event.code()),
            ) else {
                return;
            };
            let accepted = self.stream.key(KeyEvent {
                action,
                key,
                repeat: event.repeat(),
            });
            if accepted {
                log::debug!("{:?} {:?}", action, key);
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Trace)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let settings = Settings::load();
        log::set_max_level(settings.level_filter());
        log::info!("FRP Pong starting...");
        // Write back so the stored key exists (and is sanitized) for editing
        if let Err(e) = settings.save() {
            log::warn!("Could not persist settings: {}", e);
        }

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let view = DomView::from_document(&document).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let game = Rc::new(RefCell::new(Game {
            stream: EventStream::with_seed(settings.seed),
            view,
            elapsed: 0,
        }));
        log::info!("Respawn seed: {:?}", settings.seed);

        // Keyboard
        for event_type in ["keydown", "keyup"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().on_key(&event);
            });
            document.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Timer
        {
            let closure = Closure::<dyn FnMut()>::new(move || {
                game.borrow_mut().on_timer();
            });
            window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                settings.interval_ms_i32(),
            )?;
            closure.forget();
        }

        log::info!("FRP Pong running ({} ms ticks)", settings.tick_interval_ms);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("FRP Pong failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use clap::Parser;

    use frp_pong::Settings;
    use frp_pong::input::EventStream;
    use frp_pong::view::{Frame, ScoreboardLog, View};

    #[derive(Parser)]
    #[command(name = "frp-pong")]
    #[command(about = "Run a headless FRP Pong game with an idle player")]
    pub struct Args {
        /// Number of timer ticks to simulate
        #[arg(default_value_t = 10_000)]
        pub ticks: u64,

        /// Override the configured respawn seed
        #[arg(long)]
        pub seed: Option<u32>,

        /// Print the final state as JSON
        #[arg(long)]
        pub json: bool,
    }

    pub fn run(args: Args, settings: Settings) -> Result<(), frp_pong::PongError> {
        let seed = args.seed.or(settings.seed);
        let mut stream = EventStream::with_seed(seed);
        let mut view = ScoreboardLog::new();
        log::info!("Simulating {} ticks (seed {:?})", args.ticks, seed);

        for elapsed in 0..args.ticks {
            view.render(&Frame::from_state(stream.on_timer(elapsed)));
        }

        let state = stream.state();
        println!(
            "player {} - {} PC  {}",
            state.player_score, state.pc_score, state.winner
        );
        if args.json {
            println!("{}", serde_json::to_string_pretty(state)?);
        }
        log::info!("{} scoreboard changes", view.changes());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    let args = headless::Args::parse();

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Trace)
        .parse_default_env()
        .init();
    let settings = frp_pong::Settings::load();
    if std::env::var_os("RUST_LOG").is_none() {
        log::set_max_level(settings.level_filter());
    }
    // First run with a settings path: write the defaults there for editing
    if frp_pong::Settings::path().is_some_and(|path| !path.exists()) {
        if let Err(e) = settings.save() {
            log::warn!("Could not persist settings: {}", e);
        }
    }
    log::info!("FRP Pong (native) starting...");

    if let Err(e) = headless::run(args, settings) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
