//! Desktop window for the counter using eframe

use eframe::egui;
use log::{error, info};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use crate::config::DisplayConfig;
use crate::counter::FrequencyCounter;
use crate::schedule::Ticker;
use crate::transport::CounterTransport;
use crate::types::CounterError;

/// First error raised by a tick, handed back to `run` after the window closes
type Failure = Rc<RefCell<Option<CounterError>>>;

pub struct CounterApp<T: CounterTransport> {
    counter: FrequencyCounter<T>,
    ticker: Ticker,
    label: String,
    display: DisplayConfig,
    failure: Failure,
}

impl<T: CounterTransport> CounterApp<T> {
    fn new(counter: FrequencyCounter<T>, display: DisplayConfig, failure: Failure) -> Self {
        let ticker = Ticker::new(counter.config().tick_period, Instant::now());
        Self {
            counter,
            ticker,
            label: String::new(),
            display,
            failure,
        }
    }

    /// Run a tick if one is due. Returns `false` once a tick has failed and
    /// the window should close; the first failure is kept for `run`.
    fn step(&mut self, now: Instant) -> bool {
        if !self.ticker.poll(now) {
            return true;
        }
        match self.counter.tick(&mut self.label) {
            Ok(_) => true,
            Err(e) => {
                error!("Tick failed: {}", e);
                self.failure.borrow_mut().get_or_insert(e);
                false
            }
        }
    }

    fn color(rgb: [u8; 3]) -> egui::Color32 {
        egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
    }
}

impl<T: CounterTransport> eframe::App for CounterApp<T> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.step(Instant::now()) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let panel = egui::Frame::NONE
            .fill(Self::color(self.display.background))
            .inner_margin(egui::Margin::same(self.display.margin));

        egui::CentralPanel::default().frame(panel).show(ctx, |ui| {
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                ui.label(
                    egui::RichText::new(self.label.as_str())
                        .font(egui::FontId::monospace(self.display.font_size))
                        .color(Self::color(self.display.foreground)),
                );
            });
        });

        ctx.request_repaint_after(self.ticker.time_until_due(Instant::now()));
    }
}

/// Open the window and tick the counter until the window is closed.
///
/// Returns the tick error that closed the window, if any.
pub fn run<T: CounterTransport + 'static>(
    counter: FrequencyCounter<T>,
    display: DisplayConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(display.title.as_str())
            .with_inner_size([display.width, display.height]),
        ..Default::default()
    };

    let failure: Failure = Rc::new(RefCell::new(None));
    let title = display.title.clone();
    let app = CounterApp::new(counter, display, Rc::clone(&failure));

    info!("Starting display");
    eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(app))))?;

    let failure = failure.borrow_mut().take();
    match failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CounterConfig;
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Mock transport that hands out scripted bytes, then times out
    struct MockTransport {
        data: VecDeque<u8>,
    }

    impl CounterTransport for MockTransport {
        type Error = std::io::Error;

        fn read(&mut self, buf: &mut [u8], _timeout_ms: u32) -> Result<usize, Self::Error> {
            let mut count = 0;
            while count < buf.len() {
                match self.data.pop_front() {
                    Some(b) => {
                        buf[count] = b;
                        count += 1;
                    }
                    None => break,
                }
            }
            Ok(count)
        }

        fn clear_input(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn app(data: &[u8]) -> (CounterApp<MockTransport>, Failure) {
        let transport = MockTransport {
            data: data.iter().copied().collect(),
        };
        let counter = FrequencyCounter::new(transport, CounterConfig::default()).unwrap();
        let failure: Failure = Rc::new(RefCell::new(None));
        let app = CounterApp::new(counter, DisplayConfig::default(), Rc::clone(&failure));
        (app, failure)
    }

    #[test]
    fn test_step_updates_label() {
        let (mut app, failure) = app(b"2.0 Hz");
        assert!(app.step(Instant::now()));
        assert_eq!(app.label, "120 rpm");
        assert!(failure.borrow().is_none());
    }

    #[test]
    fn test_step_waits_for_period() {
        let (mut app, _failure) = app(b"1.0 Hz2.0 Hz");
        let start = Instant::now();
        assert!(app.step(start));
        assert_eq!(app.label, "60 rpm");

        // Not due yet, so the second frame stays unread
        assert!(app.step(start));
        assert_eq!(app.label, "60 rpm");

        assert!(app.step(start + Duration::from_millis(200)));
        assert_eq!(app.label, "120 rpm");
    }

    #[test]
    fn test_step_failure_keeps_first_error() {
        let (mut app, failure) = app(b"1.0 Hzbad Hzinf Hz");
        let start = Instant::now();
        assert!(app.step(start));
        assert_eq!(app.label, "60 rpm");

        assert!(!app.step(start + Duration::from_millis(200)));
        assert_eq!(app.label, "60 rpm");
        assert!(matches!(*failure.borrow(), Some(CounterError::Parse(_))));

        // "inf" fails differently; the recorded error must not change
        assert!(!app.step(start + Duration::from_millis(400)));
        assert_eq!(app.label, "60 rpm");
        assert!(matches!(*failure.borrow(), Some(CounterError::Parse(_))));
    }
}
