use log::debug;

use crate::commands::{gestures, CommandRegistry, Page};
use crate::config::VaadinConfig;
use crate::error::{VaadinError, VaadinResult};
use crate::query::{NoApplicationWarning, VaadinWaiter};

/// A page together with the Vaadin extension state for one test session.
///
/// The "no testable application" warning is issued at most once per session.
#[derive(Debug)]
pub struct VaadinSession<P: Page> {
    page: P,
    config: VaadinConfig,
    warning: NoApplicationWarning,
    commands: CommandRegistry<P>,
}

impl<P: Page> VaadinSession<P> {
    pub fn new(page: P) -> Self {
        Self::with_config(page, VaadinConfig::default())
    }

    pub fn with_config(page: P, config: VaadinConfig) -> Self {
        Self {
            page,
            config,
            warning: NoApplicationWarning::new(),
            commands: CommandRegistry::with_defaults(),
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn config(&self) -> &VaadinConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut VaadinConfig {
        &mut self.config
    }

    pub fn commands(&self) -> &CommandRegistry<P> {
        &self.commands
    }

    pub fn commands_mut(&mut self) -> &mut CommandRegistry<P> {
        &mut self.commands
    }

    /// Whether this session has already warned about a page without Vaadin.
    pub fn warned_no_application(&self) -> bool {
        self.warning.is_issued()
    }

    /// Run a command by name, e.g. `execute("pressArrowKey", "vaadin=app::PID_Stree", "down")`.
    pub fn execute(&self, name: &str, target: &str, value: &str) -> VaadinResult<()> {
        let command =
            self.commands.get(name).ok_or_else(|| VaadinError::UnknownCommand(name.to_string()))?;
        command.execute(self, target, value)
    }

    /// Builder for a customised settle wait.
    pub fn wait_until_settled(&self) -> VaadinWaiter<'_, P::Window> {
        VaadinWaiter::new(self.page.window(), &self.warning, self.config.settle_poller())
    }

    /// Block until no Vaadin client has pending work, using the configured timeout.
    pub fn wait_for_vaadin(&self) -> VaadinResult<()> {
        self.wait_until_settled()
            .error(&format!(
                "Vaadin did not settle within {} ms",
                self.config.settle_timeout_ms
            ))
            .run()
    }

    pub fn find_element(&self, locator: &str) -> VaadinResult<P::Element> {
        self.page.find_element(locator)
    }

    pub fn scroll(&self, locator: &str, scroll_top: &str) -> VaadinResult<()> {
        gestures::scroll(&self.page, locator, scroll_top)
    }

    pub fn scroll_left(&self, locator: &str, scroll_left: &str) -> VaadinResult<()> {
        gestures::scroll_left(&self.page, locator, scroll_left)
    }

    pub fn contextmenu(&self, locator: &str) -> VaadinResult<()> {
        gestures::contextmenu(&self.page, locator)
    }

    pub fn contextmenu_at(&self, locator: &str, coords: &str) -> VaadinResult<()> {
        gestures::contextmenu_at(&self.page, locator, coords, &self.config.context_menu_offset)
    }

    /// Does nothing. Kept so that exported test cases using it still run.
    pub fn screen_capture(&self, locator: &str, _value: &str) -> VaadinResult<()> {
        debug!("screenCapture({}) ignored", locator);
        Ok(())
    }

    pub fn enter_character(&self, locator: &str, value: &str) -> VaadinResult<()> {
        gestures::enter_character(&self.page, locator, value)
    }

    pub fn press_arrow_key(&self, locator: &str, value: &str) -> VaadinResult<()> {
        gestures::press_arrow_key(&self.page, locator, value)
    }

    pub fn show_tooltip(&self, locator: &str) -> VaadinResult<()> {
        gestures::show_tooltip(&self.page, locator)
    }

    /// Click a notification away. Returns false if it is still displayed after
    /// the configured notification timeout.
    pub fn close_notification(&self, locator: &str) -> VaadinResult<bool> {
        gestures::close_notification(&self.page, locator, self.config.notification_poller())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;
    use crate::testing::{FakeClient, FakePage, FakeRegistry, FakeWindow};

    fn session(window: FakeWindow) -> VaadinSession<FakePage> {
        let mut session = VaadinSession::new(FakePage::new(window));
        session.config_mut().settle_timeout_ms = 40;
        session.config_mut().settle_interval_ms = 5;
        session
    }

    #[derive(Debug)]
    struct Click;

    impl Command<FakePage> for Click {
        fn name(&self) -> &str {
            "click"
        }

        fn execute(
            &self,
            session: &VaadinSession<FakePage>,
            target: &str,
            _value: &str,
        ) -> VaadinResult<()> {
            let element = session.find_element(target)?;
            session.page().fire_mouse_event("click", &element, 0.0, 0.0)
        }
    }

    #[test]
    fn all_builtin_commands_registered() {
        let session = session(FakeWindow::new());
        let mut names = session.commands().names();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "closeNotification",
                "contextmenu",
                "contextmenuAt",
                "enterCharacter",
                "pressArrowKey",
                "screenCapture",
                "scroll",
                "scrollLeft",
                "showTooltip",
                "waitForVaadin"
            ]
        );
    }

    #[test]
    fn dispatches_by_name() {
        let session = session(FakeWindow::new());
        session.execute("scroll", "panel", "30").unwrap();
        session.execute("contextmenu", "row", "").unwrap();
        session.execute("contextmenuAt", "row", "").unwrap();
        session.execute("screenCapture", "", "shot").unwrap();
        session.execute("enterCharacter", "field", "x").unwrap();
        session.execute("pressArrowKey", "tree", "up").unwrap();
        session.execute("scrollLeft", "grid", "15").unwrap();
        session.execute("showTooltip", "button", "").unwrap();
        session.execute("closeNotification", "note", "").unwrap();
        session.execute("waitForVaadin", "", "").unwrap();
        assert_eq!(
            session.page().events(),
            vec![
                "scrollTop panel 30",
                "contextmenu row 0,0",
                "contextmenu row 12,22",
                "type field x",
                "keydown field x",
                "keyup field x",
                "keydown tree \\38",
                "keyup tree \\38",
                "scrollLeft grid 15",
                "hover button",
                "click note",
            ]
        );
        assert!(session.warned_no_application());
    }

    #[test]
    fn unknown_command() {
        let session = session(FakeWindow::new());
        assert!(matches!(
            session.execute("doubleClick", "row", ""),
            Err(VaadinError::UnknownCommand(_))
        ));
    }

    #[test]
    fn custom_commands_can_be_registered() {
        let mut session = session(FakeWindow::new());
        session.commands_mut().register(Click);
        session.execute("click", "button", "").unwrap();
        assert_eq!(session.page().events(), vec!["click button 0,0"]);
    }

    #[test]
    fn close_notification_times_out_on_sticky_notification() {
        let mut session = session(FakeWindow::new());
        session.config_mut().notification_timeout_ms = 20;
        session.config_mut().notification_interval_ms = 5;
        session.page().hide_after_checks("note", u32::MAX);
        assert!(matches!(
            session.execute("closeNotification", "note", ""),
            Err(VaadinError::Timeout(_))
        ));
        assert!(!session.close_notification("note").unwrap());
    }

    #[test]
    fn configured_offset_is_used() {
        let mut session = session(FakeWindow::new());
        session.config_mut().context_menu_offset = "1, 1".to_string();
        session.contextmenu_at("row", "").unwrap();
        assert_eq!(session.page().events(), vec!["contextmenu row 11,21"]);
    }

    #[test]
    fn wait_for_vaadin_times_out_while_busy() {
        let client = FakeClient::active();
        let window = FakeWindow::new()
            .with_registry("vaadin", FakeRegistry::with_clients(vec![("app", client.clone())]));
        let session = session(window);
        match session.wait_for_vaadin() {
            Err(VaadinError::Timeout(message)) => assert!(message.contains("40 ms")),
            other => panic!("expected timeout, got {:?}", other),
        }

        client.set_active(false);
        session.wait_for_vaadin().unwrap();
        assert!(!session.warned_no_application());
    }
}
