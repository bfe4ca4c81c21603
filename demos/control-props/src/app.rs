use latch_core::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Event {
    /// Click the first shared toggle.
    ToggleA,
    /// Click the second shared toggle.
    ToggleB,
    /// Click the uncontrolled toggle.
    ToggleFree,
    /// Reset the uncontrolled toggle to its initial value.
    ResetFree,
    /// The page-level reset button: both shared toggles off, counter cleared.
    ResetAll,
}

/// Two toggles controlled by one shared value, plus one that manages itself.
/// Shared toggles stop responding once the click budget is spent.
pub struct App {
    both_on: ExternalStore<bool>,
    times_clicked: ExternalStore<u32>,
    click_limit: u32,
    a: ToggleController,
    b: ToggleController,
    free: ToggleController,
}

impl App {
    pub fn new(initial_on: bool, click_limit: u32) -> Self {
        let both_on = store(initial_on);
        let times_clicked = store(0u32);

        let shared = |name: &str| {
            let both_on = both_on.clone();
            let times_clicked = times_clicked.clone();
            ToggleController::new(
                ControllerConfig::new()
                    .names(ControlNames::default().component(name))
                    .external_on(Some(both_on.get()))
                    .on_change(move |next: &ControllerState, action: &Action| {
                        if matches!(action, Action::Toggle) && times_clicked.get() > click_limit {
                            log::info!("click budget spent; ignoring {action}");
                            return;
                        }
                        both_on.set(next.on);
                        times_clicked.update(|c| *c += 1);
                    }),
            )
        };
        let a = shared("ToggleA");
        let b = shared("ToggleB");
        let free = ToggleController::new(
            ControllerConfig::new()
                .initial_on(initial_on)
                .names(ControlNames::default().component("FreeToggle")),
        );

        Self {
            both_on,
            times_clicked,
            click_limit,
            a,
            b,
            free,
        }
    }

    /// Feed the caller-owned value back into the controlled toggles, the way a
    /// parent re-renders its children after its own state changed.
    fn sync(&mut self) {
        let on = Some(self.both_on.get());
        self.a.set_external_on(on);
        self.b.set_external_on(on);
    }

    pub fn handle(&mut self, event: Event) -> Result<(), ControlError> {
        self.sync();
        match event {
            Event::ToggleA => {
                self.a.toggle()?;
            }
            Event::ToggleB => {
                self.b.toggle()?;
            }
            Event::ToggleFree => {
                self.free.toggle()?;
            }
            Event::ResetFree => {
                self.free.reset()?;
            }
            Event::ResetAll => {
                self.both_on.set(false);
                self.times_clicked.set(0);
            }
        }
        self.sync();
        Ok(())
    }

    pub fn shared_on(&self) -> (bool, bool) {
        (self.a.current_value(), self.b.current_value())
    }

    pub fn free_on(&self) -> bool {
        self.free.current_value()
    }

    pub fn times_clicked(&self) -> u32 {
        self.times_clicked.get()
    }

    pub fn over_budget(&self) -> bool {
        self.times_clicked.get() > self.click_limit
    }

    pub fn status_line(&self) -> String {
        let onoff = |v: bool| if v { "on" } else { "off" };
        let (a, b) = self.shared_on();
        let notice = if self.over_budget() {
            "Whoa, you clicked too much!".to_string()
        } else {
            format!("Click count: {}", self.times_clicked())
        };
        format!(
            "a={} b={} free={} | {}",
            onoff(a),
            onoff(b),
            onoff(self.free_on()),
            notice
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_toggles_move_together() {
        let mut app = App::new(false, 4);
        app.handle(Event::ToggleA).unwrap();
        assert_eq!(app.shared_on(), (true, true));
        app.handle(Event::ToggleB).unwrap();
        assert_eq!(app.shared_on(), (false, false));
        assert_eq!(app.times_clicked(), 2);
        assert!(!app.free_on());
    }

    #[test]
    fn test_click_budget() {
        let mut app = App::new(false, 4);
        for _ in 0..5 {
            app.handle(Event::ToggleA).unwrap();
        }
        assert_eq!(app.times_clicked(), 5);
        assert!(app.over_budget());
        assert_eq!(app.shared_on(), (true, true));

        app.handle(Event::ToggleB).unwrap();
        assert_eq!(app.times_clicked(), 5);
        assert_eq!(app.shared_on(), (true, true));
        assert!(app.status_line().ends_with("Whoa, you clicked too much!"));

        app.handle(Event::ResetAll).unwrap();
        assert_eq!(app.shared_on(), (false, false));
        assert_eq!(app.status_line(), "a=off b=off free=off | Click count: 0");
    }

    #[test]
    fn test_free_toggle_is_independent() {
        let mut app = App::new(true, 4);
        app.handle(Event::ToggleFree).unwrap();
        assert!(!app.free_on());
        assert_eq!(app.shared_on(), (true, true));
        app.handle(Event::ToggleFree).unwrap();
        app.handle(Event::ToggleFree).unwrap();
        app.handle(Event::ResetFree).unwrap();
        assert!(app.free_on());
        assert_eq!(app.times_clicked(), 0);
    }
}
