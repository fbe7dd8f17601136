use anyhow::Result;
use crossterm::event::{Event, MouseEvent};

use crate::{App, components::SliderPane, model::Slide};

pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) -> Result<()> {
    let now_ms = app.now_ms();
    let event = Event::Mouse(mouse);
    let event_tx = app.event_tx.clone();
    app.slider.process_event(&event, now_ms, &event_tx)?;

    Ok(())
}

pub(super) fn handle_slides_loaded(app: &mut App, slides: Vec<Slide>, warning: Option<String>) {
    // Constructing the pane arms the first autoplay deadline; the draw at
    // the end of this reaction step is the initial render.
    app.slider = SliderPane::new(
        slides,
        app.config.slider_config(),
        app.config.show_dots,
        app.config.show_arrows,
        app.now_ms(),
    );

    if let Some(warning) = warning {
        app.status_error = Some(warning);
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.status_error = Some(message);
}

pub(super) fn handle_tick(app: &mut App) {
    let now_ms = app.now_ms();
    app.slider.tick(now_ms);
}
