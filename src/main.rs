//! Aisle Dash entry point
//!
//! Wires the game core into the invitation page: DOM events in, snapshot
//! renders out, timers owned here and torn down on every phase exit.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, KeyboardEvent, MouseEvent, TouchEvent};

    use aisle_dash::consts::*;
    use aisle_dash::game::Game;
    use aisle_dash::input::{self, Action, Command, SwipeTracker};
    use aisle_dash::platform::scheduler::{Scheduler, TimerSlot};
    use aisle_dash::platform::share::{self, ShareOutcome};
    use aisle_dash::platform::storage::LocalScoreStore;
    use aisle_dash::platform::{self, haptics};
    use aisle_dash::scroll;
    use aisle_dash::settings::Settings;
    use aisle_dash::sim::{GameEvent, Phase};

    /// Haptic pulse length for a lane move
    const MOVE_PULSE_MS: u32 = 10;
    /// Minimum gap between active-section recomputations
    const NAV_THROTTLE_MS: f64 = 100.0;
    /// Ground sprite strip width; the offset wraps here
    const GROUND_WRAP_PX: f64 = 240.0;

    struct App {
        game: Game<LocalScoreStore>,
        scheduler: Scheduler,
        swipe: SwipeTracker,
        settings: Settings,
        ground_offset: f64,
    }

    fn now_ms() -> f64 {
        js_sys::Date::now()
    }

    fn document() -> Option<Document> {
        web_sys::window().and_then(|w| w.document())
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        let mut settings = Settings::load();
        settings.reduced_motion |= platform::prefers_reduced_motion();

        let seed = now_ms() as u64;
        let app = Rc::new(RefCell::new(App {
            game: Game::new(seed, LocalScoreStore),
            scheduler: Scheduler::new(),
            swipe: SwipeTracker::new(),
            settings,
            ground_offset: 0.0,
        }));

        setup_keyboard(app.clone());
        setup_touch(app.clone());
        setup_buttons(app.clone());
        setup_share_button(app.clone());
        setup_close_button(app.clone());
        setup_auto_pause(app.clone());
        setup_section_nav();

        render(&app.borrow());
        log::info!("Aisle Dash ready");
    }

    /// Route a logical action through the phase guards
    fn dispatch(app: &Rc<RefCell<App>>, action: Action) {
        let command = input::resolve(app.borrow().game.phase(), action);
        if let Some(command) = command {
            apply(app, command);
        }
    }

    fn apply(app: &Rc<RefCell<App>>, command: Command) {
        match command {
            Command::Start => {
                if app.borrow_mut().game.start(now_ms()) {
                    start_game_tick(app);
                    start_ground_scroll(app);
                }
            }
            Command::Pause => {
                let mut a = app.borrow_mut();
                if a.game.pause() {
                    a.scheduler.stop_all();
                }
            }
            Command::Resume => {
                if app.borrow_mut().game.resume() {
                    start_game_tick(app);
                    start_ground_scroll(app);
                }
            }
            Command::MoveUp | Command::MoveDown => {
                let (moved, haptics_on) = {
                    let mut a = app.borrow_mut();
                    let moved = if command == Command::MoveUp {
                        a.game.move_up()
                    } else {
                        a.game.move_down()
                    };
                    (moved, a.settings.haptics)
                };
                if moved && haptics_on {
                    haptics::pulse(MOVE_PULSE_MS);
                }
            }
        }
        render(&app.borrow());
    }

    fn close_game(app: &Rc<RefCell<App>>) {
        let mut a = app.borrow_mut();
        a.game.close();
        a.scheduler.stop_all();
        drop(a);
        render(&app.borrow());
    }

    /// (Re)start the logic tick at the game's current period. Safe to call
    /// from inside the tick itself after a level-up.
    fn start_game_tick(app: &Rc<RefCell<App>>) {
        let period = app.borrow().game.tick_period_ms().round() as i32;
        let handle = app.clone();
        app.borrow_mut()
            .scheduler
            .start_interval(TimerSlot::GameTick, period, move || on_tick(&handle));
    }

    fn start_ground_scroll(app: &Rc<RefCell<App>>) {
        if app.borrow().settings.reduced_motion {
            return;
        }
        let handle = app.clone();
        app.borrow_mut().scheduler.start_interval(
            TimerSlot::GroundScroll,
            GROUND_TICK_MS,
            move || {
                let offset = {
                    let mut a = handle.borrow_mut();
                    a.ground_offset = (a.ground_offset + 2.0) % GROUND_WRAP_PX;
                    a.ground_offset
                };
                if let Some(el) = document().and_then(|d| d.get_element_by_id("game-ground")) {
                    let _ =
                        el.set_attribute("style", &format!("background-position-x:{:.0}px", -offset));
                }
            },
        );
    }

    fn on_tick(app: &Rc<RefCell<App>>) {
        let events = app.borrow_mut().game.tick(now_ms());
        for event in &events {
            match event {
                GameEvent::LevelUp {
                    level,
                    tick_period_ms,
                } => {
                    log::info!("level {} reached, tick now {} ms", level, tick_period_ms);
                    start_game_tick(app);
                }
                GameEvent::GameOver { score } => {
                    log::info!("game over at score {}", score);
                    app.borrow_mut().scheduler.stop_all();
                }
                GameEvent::NewHighScore { score } => {
                    log::info!("new best score {}", score);
                }
                _ => {}
            }
        }
        render(&app.borrow());
    }

    fn phase_name(phase: Phase) -> &'static str {
        match phase {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Over => "over",
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    /// Push the current snapshot into the page. The page is a pure
    /// consumer; everything it shows comes from here.
    fn render(app: &App) {
        let Some(document) = document() else { return };
        let snap = app.game.snapshot(now_ms());

        set_text(&document, "game-score", &snap.score.to_string());
        set_text(&document, "game-level", &snap.level_label);
        set_text(&document, "game-best", &snap.high_score.to_string());
        set_text(&document, "game-dialogue", snap.dialogue.as_deref().unwrap_or(""));

        if let Some(root) = document.get_element_by_id("game-root") {
            let _ = root.set_attribute("data-phase", phase_name(snap.phase));
            let _ = root.set_attribute(
                "data-invincible",
                if snap.is_invincible { "1" } else { "0" },
            );
        }
        if let Some(player) = document.get_element_by_id("game-player") {
            let _ = player.set_attribute("data-lane", &snap.player_lane.to_string());
        }
        if let Some(field) = document.get_element_by_id("game-field") {
            let mut html = String::new();
            for entity in &snap.entities {
                let kind = match entity.kind {
                    aisle_dash::sim::EntityKind::Catch => "catch",
                    aisle_dash::sim::EntityKind::PowerUp => "powerup",
                    aisle_dash::sim::EntityKind::Avoid => "avoid",
                };
                html.push_str(&format!(
                    r#"<span class="entity entity-{}" style="--lane:{};--pos:{:.2}">{}</span>"#,
                    kind, entity.lane, entity.position, entity.emoji
                ));
            }
            field.set_inner_html(&html);
        }
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(action) = input::key_action(&event.key()) {
                // Keep space/arrows from scrolling the invitation page
                event.prevent_default();
                dispatch(&app, action);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_touch(app: Rc<RefCell<App>>) {
        let Some(root) = document().and_then(|d| d.get_element_by_id("game-root")) else {
            return;
        };

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    event.prevent_default();
                    app.borrow_mut()
                        .swipe
                        .begin(touch.client_x() as f32, touch.client_y() as f32);
                }
            });
            let _ = root
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.changed_touches().get(0) {
                    let action = app
                        .borrow_mut()
                        .swipe
                        .end(touch.client_x() as f32, touch.client_y() as f32);
                    if let Some(action) = action {
                        dispatch(&app, action);
                    }
                }
            });
            let _ =
                root.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                app.borrow_mut().swipe.cancel();
            });
            let _ = root
                .add_event_listener_with_callback("touchcancel", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        let Some(document) = document() else { return };
        let bindings = [
            ("game-btn-up", Action::LaneUp),
            ("game-btn-down", Action::LaneDown),
            ("game-btn-start", Action::Confirm),
            ("game-btn-pause", Action::PauseToggle),
        ];
        for (id, action) in bindings {
            if let Some(btn) = document.get_element_by_id(id) {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    dispatch(&app, action);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_share_button(app: Rc<RefCell<App>>) {
        let Some(btn) = document().and_then(|d| d.get_element_by_id("game-btn-share")) else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let score = app.borrow().game.snapshot(now_ms()).score;
            share::share_score(score, |outcome| {
                let message = match outcome {
                    ShareOutcome::Shared => "Shared!",
                    ShareOutcome::Copied => "Copied to clipboard",
                    ShareOutcome::Unavailable => "Sharing is not available here",
                };
                if let Some(document) = document() {
                    set_text(&document, "game-share-status", message);
                }
            });
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_close_button(app: Rc<RefCell<App>>) {
        let Some(btn) = document().and_then(|d| d.get_element_by_id("game-btn-close")) else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            close_game(&app);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_auto_pause(app: Rc<RefCell<App>>) {
        let Some(document) = document() else { return };
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if doc.visibility_state() == web_sys::VisibilityState::Hidden
                && app.borrow().game.phase() == Phase::Running
            {
                log::info!("auto-paused (tab hidden)");
                apply(&app, Command::Pause);
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn collect_elements(document: &Document, selector: &str) -> Vec<Element> {
        let mut out = Vec::new();
        if let Ok(list) = document.query_selector_all(selector) {
            for i in 0..list.length() {
                if let Some(node) = list.item(i) {
                    if let Ok(el) = node.dyn_into::<Element>() {
                        out.push(el);
                    }
                }
            }
        }
        out
    }

    fn update_active_section(sections: &[Element], links: &[Element]) {
        let Some(window) = web_sys::window() else { return };
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let rects = scroll::section_rects(sections);
        let active = scroll::active_section(&rects, viewport_height);
        for (i, link) in links.iter().enumerate() {
            if Some(i) == active {
                let _ = link.class_list().add_1("active");
            } else {
                let _ = link.class_list().remove_1("active");
            }
        }
    }

    /// Highlight the nav entry for the section nearest the viewport center,
    /// and smooth-scroll on nav clicks.
    fn setup_section_nav() {
        let Some(document) = document() else { return };
        let sections = collect_elements(&document, "[data-section]");
        let links = collect_elements(&document, "[data-section-link]");
        if sections.is_empty() {
            return;
        }

        // Once on mount
        update_active_section(&sections, &links);

        // Throttled, passive recompute on scroll
        {
            let sections = sections.clone();
            let links = links.clone();
            let last_run = Cell::new(0.0f64);
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let now = now_ms();
                if now - last_run.get() < NAV_THROTTLE_MS {
                    return;
                }
                last_run.set(now);
                update_active_section(&sections, &links);
            });
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(true);
            if let Some(window) = web_sys::window() {
                let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                    "scroll",
                    closure.as_ref().unchecked_ref(),
                    &options,
                );
            }
            closure.forget();
        }

        // Nav clicks scroll the target section's top to the origin
        for (i, link) in links.iter().enumerate() {
            let Some(target) = sections.get(i).cloned() else { break };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
                scroll::scroll_to_section(&target);
            });
            let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use aisle_dash::game::Game;
    use aisle_dash::platform::storage::MemoryStore;
    use aisle_dash::sim::{EntityKind, GameEvent, Phase};

    env_logger::init();
    log::info!("Aisle Dash (native) - headless demo run");

    // Steer toward the nearest treat, dodge hazards closing on our lane
    fn steer(game: &mut Game<MemoryStore>, now_ms: f64) {
        let snap = game.snapshot(now_ms);
        let lane = snap.player_lane;

        let danger = snap
            .entities
            .iter()
            .any(|e| e.kind == EntityKind::Avoid && e.lane == lane && e.position < 4.0);
        if danger {
            if !game.move_up() {
                game.move_down();
            }
            return;
        }

        if let Some(target) = snap
            .entities
            .iter()
            .filter(|e| e.kind != EntityKind::Avoid)
            .min_by(|a, b| a.position.total_cmp(&b.position))
        {
            if target.lane < lane {
                game.move_up();
            } else if target.lane > lane {
                game.move_down();
            }
        }
    }

    let mut game = Game::new(0xA15E, MemoryStore::default());
    let mut now = 0.0;
    game.start(now);

    let mut ticks = 0u32;
    while game.phase() == Phase::Running && ticks < 600 {
        now += game.tick_period_ms();
        for event in game.tick(now) {
            if let GameEvent::LevelUp { level, .. } = event {
                log::info!("reached level {}", level);
            }
        }
        steer(&mut game, now);
        ticks += 1;
    }

    let snap = game.snapshot(now);
    println!(
        "demo finished after {} ticks: score {}, best {}",
        ticks, snap.score, snap.high_score
    );
}
