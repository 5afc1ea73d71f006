//! Tilt Words entry point
//!
//! Handles platform-specific initialization and wires host events into the
//! game controller.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{DeviceOrientationEvent, Document, HtmlElement, Response};

    use tilt_words::consts::TICK_INTERVAL_MS;
    use tilt_words::platform::Environment;
    use tilt_words::sim::{GameController, Orientation, PlayedEntry, ScreenRotation, TimerKind, WordBank};
    use tilt_words::ui::{NEXT_ROUND_HINT, PERMISSION_DENIED_ALERT, View};
    use tilt_words::{GameConfig, GameError};

    // JS bindings for APIs web-sys does not cover (vendor-prefixed or iOS-only)
    #[wasm_bindgen(inline_js = "
        export function screen_rotation() {
            return (screen.orientation && screen.orientation.angle) || window.orientation || 0;
        }

        export function needs_motion_permission() {
            return typeof DeviceOrientationEvent !== 'undefined'
                && typeof DeviceOrientationEvent.requestPermission === 'function';
        }

        export function request_motion_permission() {
            return DeviceOrientationEvent.requestPermission();
        }

        export function request_fullscreen() {
            const elem = document.documentElement;
            if (elem.requestFullscreen) {
                elem.requestFullscreen().catch(e => console.warn('Fullscreen refused:', e));
            } else if (elem.webkitRequestFullscreen) {
                elem.webkitRequestFullscreen();
            } else if (elem.msRequestFullscreen) {
                elem.msRequestFullscreen();
            }
        }
    ")]
    extern "C" {
        fn screen_rotation() -> i32;
        fn needs_motion_permission() -> bool;
        fn request_motion_permission() -> js_sys::Promise;
        fn request_fullscreen();
    }

    /// Controller plus the browser environment it drives
    struct Game {
        controller: GameController,
        env: BrowserEnv,
    }

    /// Run one controller handler against the browser environment
    fn dispatch<F>(game: &Rc<RefCell<Game>>, f: F)
    where
        F: FnOnce(&mut GameController, &mut BrowserEnv),
    {
        let mut g = game.borrow_mut();
        let Game { controller, env } = &mut *g;
        f(controller, env);
    }

    /// DOM-backed `Environment`
    struct BrowserEnv {
        document: Document,
        game: Weak<RefCell<Game>>,
        /// Interval callbacks, created once per timer and kept for the page lifetime
        /// (a ticker stops itself from inside its own callback)
        callbacks: HashMap<TimerKind, Closure<dyn FnMut()>>,
        /// Active interval handles
        intervals: HashMap<TimerKind, i32>,
        /// Last result list written to the DOM
        shown_results: Option<Vec<PlayedEntry>>,
    }

    impl BrowserEnv {
        fn new(document: Document, game: Weak<RefCell<Game>>) -> Self {
            Self {
                document,
                game,
                callbacks: HashMap::new(),
                intervals: HashMap::new(),
                shown_results: None,
            }
        }

        fn element(&self, id: &str) -> Option<HtmlElement> {
            self.document.get_element_by_id(id)?.dyn_into().ok()
        }

        /// Set an element's text and show it, or hide it
        fn show_text(&self, id: &str, text: Option<String>) {
            if let Some(el) = self.element(id) {
                match text {
                    Some(text) => {
                        el.set_text_content(Some(&text));
                        let _ = el.style().set_property("display", "block");
                    }
                    None => {
                        let _ = el.style().set_property("display", "none");
                    }
                }
            }
        }

        fn render_results(&mut self, results: Option<&[PlayedEntry]>) {
            if self.shown_results.as_deref() == results {
                return;
            }
            self.shown_results = results.map(|r| r.to_vec());

            let Some(list) = self.element("resultList") else {
                return;
            };
            let Some(results) = results else {
                let _ = list.style().set_property("display", "none");
                return;
            };

            list.set_inner_html("");
            for entry in results {
                if let Ok(p) = self.document.create_element("p") {
                    p.set_text_content(Some(&entry.word));
                    p.set_class_name(entry.status.as_class());
                    let _ = list.append_child(&p);
                }
            }
            if let Ok(hint) = self.document.create_element("p") {
                hint.set_text_content(Some(NEXT_ROUND_HINT));
                hint.set_class_name("hint");
                let _ = list.append_child(&hint);
            }
            let _ = list.style().set_property("display", "block");
        }

        fn tick_callback(&mut self, timer: TimerKind) -> &Closure<dyn FnMut()> {
            let game = self.game.clone();
            self.callbacks.entry(timer).or_insert_with(|| {
                Closure::<dyn FnMut()>::new(move || {
                    if let Some(game) = game.upgrade() {
                        dispatch(&game, |c, e| c.timer_tick(timer, e));
                    }
                })
            })
        }
    }

    impl Environment for BrowserEnv {
        fn orientation(&self) -> Orientation {
            let Some(window) = web_sys::window() else {
                return Orientation::Portrait;
            };
            let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            Orientation::from_size(width, height)
        }

        fn rotation(&self) -> ScreenRotation {
            ScreenRotation::from_degrees(screen_rotation())
        }

        fn start_ticker(&mut self, timer: TimerKind) {
            self.stop_ticker(timer);
            let Some(window) = web_sys::window() else {
                return;
            };
            let callback = self.tick_callback(timer).as_ref().unchecked_ref::<js_sys::Function>().clone();
            match window.set_interval_with_callback_and_timeout_and_arguments_0(&callback, TICK_INTERVAL_MS) {
                Ok(handle) => {
                    self.intervals.insert(timer, handle);
                }
                Err(e) => log::error!("Failed to schedule {:?} ticker: {:?}", timer, e),
            }
        }

        fn stop_ticker(&mut self, timer: TimerKind) {
            if let Some(handle) = self.intervals.remove(&timer) {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(handle);
                }
            }
        }

        fn render(&mut self, view: &View) {
            self.show_text("countdown", view.countdown.map(|n| n.to_string()));
            self.show_text("word", view.word.clone());
            self.show_text("timer", view.clock_text());
            self.show_text("score", view.score_text());
            self.show_text("instruction", view.prompt.map(|p| p.text().to_string()));
            self.render_results(view.results.as_deref());

            if let Some(body) = self.document.body() {
                let _ = body.style().set_property("background-color", view.feedback.color());
            }
        }

        fn request_fullscreen(&mut self) {
            request_fullscreen();
        }
    }

    /// Fetch and parse the word list
    async fn fetch_words(url: &str) -> Result<WordBank, GameError> {
        let js_err = |e: JsValue| GameError::Fetch(format!("{:?}", e));

        let window = web_sys::window().ok_or_else(|| GameError::Fetch("no window".into()))?;
        let response: Response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(js_err)?
            .dyn_into()
            .map_err(js_err)?;
        if !response.ok() {
            return Err(GameError::HttpStatus(response.status()));
        }

        let body = JsFuture::from(response.text().map_err(js_err)?)
            .await
            .map_err(js_err)?
            .as_string()
            .ok_or_else(|| GameError::Malformed("body is not text".into()))?;
        WordBank::from_json(&body)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Tilt Words starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let config = GameConfig::load();
        let words_url = config.words_url.clone();
        let seed = js_sys::Date::now() as u64;

        let game = Rc::new_cyclic(|weak| {
            RefCell::new(Game {
                controller: GameController::new(config, seed),
                env: BrowserEnv::new(document, weak.clone()),
            })
        });
        log::info!("Game initialized with seed: {}", seed);

        setup_tilt_detection(game.clone());
        setup_resize_handler(game.clone());

        // Show the rotate prompt (or nothing) before the words arrive
        dispatch(&game, |c, e| c.orientation_changed(e));

        let result = fetch_words(&words_url).await;
        dispatch(&game, |c, e| match result {
            Ok(bank) => c.words_loaded(bank, e),
            Err(err) => c.words_failed(err, e),
        });

        log::info!("Tilt Words running!");
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            dispatch(&game, |c, e| c.orientation_changed(e));
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn attach_tilt_listener(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: DeviceOrientationEvent| {
            let gamma = event.gamma();
            dispatch(&game, |c, e| c.tilt(gamma, e));
        });
        let _ = window
            .add_event_listener_with_callback("deviceorientation", closure.as_ref().unchecked_ref());
        closure.forget();
        log::info!("Tilt detection active");
    }

    /// Subscribe to tilt readings, behind a permission button where the
    /// browser demands a user gesture first
    fn setup_tilt_detection(game: Rc<RefCell<Game>>) {
        if !needs_motion_permission() {
            attach_tilt_listener(game);
            return;
        }

        let document = web_sys::window().and_then(|w| w.document());
        let Some(btn) = document
            .and_then(|d| d.get_element_by_id("requestPermission"))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            log::warn!("Motion permission needed but no permission button found");
            return;
        };
        let _ = btn.style().set_property("display", "block");

        let btn_clone = btn.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let game = game.clone();
            let btn = btn_clone.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match JsFuture::from(request_motion_permission()).await {
                    Ok(answer) if answer.as_string().as_deref() == Some("granted") => {
                        attach_tilt_listener(game);
                        let _ = btn.style().set_property("display", "none");
                    }
                    Ok(_) => {
                        log::warn!("{}", GameError::PermissionDenied);
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message(PERMISSION_DENIED_ALERT);
                        }
                    }
                    Err(e) => log::error!("Motion permission request failed: {:?}", e),
                }
            });
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
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
    log::info!("Tilt Words (native) starting...");
    log::info!("Native mode plays a scripted round - run with `trunk serve` for the web version");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "web/words.json".to_string());
    if let Err(e) = headless::play_round(&path) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::error::Error;
    use std::time::{SystemTime, UNIX_EPOCH};

    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use tilt_words::GameConfig;
    use tilt_words::platform::HeadlessEnvironment;
    use tilt_words::sim::{GameController, Orientation, TimerKind, WordBank};
    use tilt_words::ui::NEXT_ROUND_HINT;

    /// Play one round with a simulated player and print the results
    pub fn play_round(path: &str) -> Result<(), Box<dyn Error>> {
        let config = GameConfig::load();
        config.validate()?;
        let seed = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64;

        let mut env = HeadlessEnvironment::landscape();
        let mut game = GameController::new(config, seed);
        let mut player = Pcg32::seed_from_u64(seed ^ 0x5eed);

        let bank = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|json| WordBank::from_json(&json).map_err(|e| e.to_string()));
        match bank {
            Ok(bank) => game.words_loaded(bank, &mut env),
            Err(e) => return Err(format!("{}: {}", path, e).into()),
        }

        while env.is_ticking(TimerKind::PreRound) {
            game.timer_tick(TimerKind::PreRound, &mut env);
        }
        while env.is_ticking(TimerKind::Round) {
            if player.random_bool(0.6) {
                let gamma = if player.random_bool(0.7) { 25.0 } else { -25.0 };
                game.tilt(Some(gamma), &mut env);
                game.tilt(Some(0.0), &mut env);
            }
            game.timer_tick(TimerKind::Round, &mut env);
        }

        env.rotate_to(Orientation::Portrait);
        game.orientation_changed(&mut env);

        let view = env.view();
        println!("{}", view.score_text().unwrap_or_default());
        for entry in view.results.unwrap_or_default() {
            println!("  [{:>9}] {}", entry.status.as_class(), entry.word);
        }
        println!("{}", NEXT_ROUND_HINT);
        Ok(())
    }
}
