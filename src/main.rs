//! Planet Face entry point
//!
//! Web: wires the canvas, buttons and animation frame loop to a `GameSession`.
//! Native: plays one scripted round headlessly and logs the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlButtonElement, HtmlCanvasElement, MouseEvent, TouchEvent};

    use planet_face::Settings;
    use planet_face::client_to_canvas;
    use planet_face::consts::{SURFACE, SURFACE_HEIGHT, SURFACE_WIDTH};
    use planet_face::renderer::shapes::{answer_scene, scene};
    use planet_face::renderer::{CanvasPainter, FrameView};
    use planet_face::sim::{Command, Cursor, GamePhase, GameSession, PointerEvent};

    /// Answer card is drawn at half scale
    const ANSWER_SCALE: f32 = 0.5;

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        settings: Settings,
        canvas: HtmlCanvasElement,
        painter: CanvasPainter,
    }

    impl Game {
        /// Convert a client-space pointer position to canvas coordinates
        fn canvas_point(&self, client_x: i32, client_y: i32) -> Vec2 {
            let rect = self.canvas.get_bounding_client_rect();
            client_to_canvas(
                Vec2::new(client_x as f32, client_y as f32),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
                SURFACE,
            )
        }

        fn pointer(&mut self, event: PointerEvent) {
            if let Some(cursor) = self.session.handle_event(event) {
                self.set_cursor(cursor);
            }
        }

        fn set_cursor(&self, cursor: Cursor) {
            if let Err(e) = self.canvas.style().set_property("cursor", cursor.as_css()) {
                log::warn!("Failed to set cursor: {:?}", e);
            }
        }

        fn render(&self) {
            let frame = FrameView::capture(&self.session);
            let shapes = scene(&frame, self.settings.locale, SURFACE);
            if let Err(e) = self.painter.draw(&shapes) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Update score text and button enablement in the DOM
        fn update_hud(&self, document: &Document) {
            let locale = self.settings.locale;
            let card = self.session.score_card();

            if let Some(el) = document.get_element_by_id("score") {
                let text = card.map(|c| c.label(locale)).unwrap_or_default();
                el.set_text_content(Some(&text));
            }
            if let Some(el) = document.get_element_by_id("message") {
                el.set_text_content(Some(card.map(|c| c.message(locale)).unwrap_or("")));
            }

            let controls = self.session.controls();
            for (id, command) in [
                ("startBtn", Command::Start),
                ("finishBtn", Command::Finish),
                ("resetBtn", Command::Reset),
            ] {
                if let Some(btn) = button(document, id) {
                    btn.set_disabled(!controls.allows(command));
                }
            }
        }
    }

    fn button(document: &Document, id: &str) -> Option<HtmlButtonElement> {
        document.get_element_by_id(id)?.dyn_into().ok()
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Planet Face starting...");

        let settings = Settings::load();
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(SURFACE_WIDTH as u32);
        canvas.set_height(SURFACE_HEIGHT as u32);
        let painter = CanvasPainter::new(&canvas).expect("Failed to get 2d context");

        draw_answer_card(&document, &settings);

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let session = GameSession::with_settings(seed, &settings);
        log::info!("Session initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            session,
            settings,
            canvas: canvas.clone(),
            painter,
        }));
        game.borrow().update_hud(&document);

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(&document, game.clone());

        request_animation_frame(game);

        log::info!("Planet Face running!");
    }

    fn draw_answer_card(document: &Document, settings: &Settings) {
        let Some(el) = document.get_element_by_id("answerCanvas") else {
            return;
        };
        if !settings.show_answer_card {
            if let Err(e) = el.set_attribute("class", "hidden") {
                log::warn!("Failed to hide answer card: {:?}", e);
            }
            return;
        }
        let Ok(canvas) = el.dyn_into::<HtmlCanvasElement>() else {
            log::warn!("answerCanvas is not a canvas");
            return;
        };

        let size = SURFACE * ANSWER_SCALE;
        canvas.set_width(size.x as u32);
        canvas.set_height(size.y as u32);
        let result = CanvasPainter::new(&canvas)
            .and_then(|p| p.draw(&answer_scene(ANSWER_SCALE, SURFACE)));
        if let Err(e) = result {
            log::error!("Failed to draw answer card: {:?}", e);
        }
    }

    /// Register a canvas listener
    fn listen<E, F>(canvas: &HtmlCanvasElement, name: &str, handler: F)
    where
        E: wasm_bindgen::convert::FromWasmAbi + 'static,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::<dyn FnMut(E)>::new(handler);
        let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse
        {
            let game = game.clone();
            listen(canvas, "mousedown", move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let p = g.canvas_point(event.client_x(), event.client_y());
                g.pointer(PointerEvent::Down(p));
            });
        }
        {
            let game = game.clone();
            listen(canvas, "mousemove", move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let p = g.canvas_point(event.client_x(), event.client_y());
                g.pointer(PointerEvent::Move(p));
            });
        }
        {
            let game = game.clone();
            listen(canvas, "mouseup", move |_event: MouseEvent| {
                game.borrow_mut().pointer(PointerEvent::Up);
            });
        }
        {
            let game = game.clone();
            listen(canvas, "mouseleave", move |_event: MouseEvent| {
                game.borrow_mut().pointer(PointerEvent::Leave);
            });
        }

        // Touch - only the first contact is tracked
        {
            let game = game.clone();
            listen(canvas, "touchstart", move |event: TouchEvent| {
                let mut g = game.borrow_mut();
                if g.session.phase() != GamePhase::Playing {
                    return;
                }
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let p = g.canvas_point(touch.client_x(), touch.client_y());
                    g.pointer(PointerEvent::Down(p));
                }
            });
        }
        {
            let game = game.clone();
            listen(canvas, "touchmove", move |event: TouchEvent| {
                let mut g = game.borrow_mut();
                if g.session.phase() != GamePhase::Playing {
                    return;
                }
                event.prevent_default();
                // Touch has no hover state
                if g.session.drag().is_none() {
                    return;
                }
                if let Some(touch) = event.touches().get(0) {
                    let p = g.canvas_point(touch.client_x(), touch.client_y());
                    g.pointer(PointerEvent::Move(p));
                }
            });
        }
        {
            let game = game.clone();
            listen(canvas, "touchend", move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().pointer(PointerEvent::Up);
            });
        }
        {
            listen(canvas, "touchcancel", move |_event: TouchEvent| {
                game.borrow_mut().pointer(PointerEvent::Cancel);
            });
        }
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        for (id, command) in [
            ("startBtn", Command::Start),
            ("finishBtn", Command::Finish),
            ("resetBtn", Command::Reset),
        ] {
            let Some(btn) = button(document, id) else {
                log::warn!("Missing button #{}", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                if g.session.apply(command) {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        g.update_hud(&document);
                    }
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game.borrow().render();
            request_animation_frame(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Planet Face (native) starting...");
    log::info!("Native mode has no window - serve the wasm build for the playable version");

    play_scripted_round();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drag every part near its target, finish, and print the result frame
#[cfg(not(target_arch = "wasm32"))]
fn play_scripted_round() {
    use glam::Vec2;
    use planet_face::Settings;
    use planet_face::renderer::FrameView;
    use planet_face::sim::{Command, GameSession, PartId, PointerEvent};

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or(0);
    let mut session = GameSession::with_settings(seed, &settings);
    session.apply(Command::Start);

    // Topmost first so nothing placed later sits on a part still to be grabbed
    for (i, id) in PartId::ALL.into_iter().enumerate().rev() {
        let from = session.parts().by_id(id).pos;
        let aim = id.target() + Vec2::new(6.0 * i as f32, -4.0 * i as f32);

        session.handle_event(PointerEvent::Down(from));
        match session.drag().copied() {
            Some(drag) if drag.part == id => {
                session.handle_event(PointerEvent::Move(aim + drag.offset));
            }
            Some(drag) => log::warn!("{} is covered by {}", id.as_str(), drag.part.as_str()),
            None => log::warn!("Missed {} at {:?}", id.as_str(), from),
        }
        session.handle_event(PointerEvent::Up);
    }

    session.apply(Command::Finish);

    if let Some(card) = session.score_card() {
        for (id, score) in card.parts {
            log::info!("{:>10}: {}", id.as_str(), score);
        }
        println!("{} {}", card.label(settings.locale), card.message(settings.locale));
    }

    match serde_json::to_string_pretty(&FrameView::capture(&session)) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize frame: {}", e),
    }
}
