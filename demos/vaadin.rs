//! Requires chromedriver running on port 4444:
//!
//!     chromedriver --port=4444
//!
//! and a Vaadin application at http://localhost:8080/sampler
//!
//! Run as follows:
//!
//!     cargo run --example vaadin

use thirtyfour_sync::prelude::*;
use thirtyfour_vaadin::prelude::*;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let caps = DesiredCapabilities::chrome();
    let driver = WebDriver::new("http://localhost:4444", &caps)?;
    driver.get("http://localhost:8080/sampler")?;

    let mut config = VaadinConfig::default();
    config.settle_timeout_ms = 30_000;
    let vaadin = driver.vaadin_with_config(config);

    // Wait for the initial render round-trips to finish.
    vaadin.wait_for_vaadin()?;

    // Filter a combo box one keystroke at a time.
    vaadin.enter_character("vaadin=sampler::PID_Scountry", "Fin")?;
    vaadin.wait_for_vaadin()?;

    // Walk down the menu tree and open its context menu.
    vaadin.press_arrow_key("vaadin=sampler::PID_Smenu", "down")?;
    vaadin.contextmenu_at("vaadin=sampler::PID_Smenu", "")?;
    vaadin.wait_for_vaadin()?;

    // Scroll the table back to the top.
    vaadin.scroll("vaadin=sampler::PID_Stable", "0")?;

    // Steps exported from Selenium IDE can be replayed by name.
    for (command, target, value) in &[
        ("waitForVaadin", "", ""),
        ("pressArrowKey", "vaadin=sampler::PID_Smenu", "up"),
        ("screenCapture", "", "after-menu"),
    ] {
        vaadin.execute(command, target, value)?;
    }

    drop(vaadin);
    driver.quit()?;

    Ok(())
}
