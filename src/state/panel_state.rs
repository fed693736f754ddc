// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Control panel state.

use crate::clock::Clock;
use crate::error::Error;
use crate::protocol::Protocol;
use crate::types::{
    LedInfo, LedState, SleepInfo, TimeFormat, TimeInfo, TimeZone, TimeZoneCatalog, WifiInfo,
};

use super::{ColorSliders, SleepForm, WifiForm};

/// Last-known settings of a clock, as shown by the control panel.
///
/// Every field stays `None` until it was read from the clock. The `apply_*`
/// methods send an update and only record it locally once the clock
/// accepted it.
///
/// # Examples
///
/// ```no_run
/// use nixie_lib::Clock;
/// use nixie_lib::state::{ColorSliders, PanelState};
///
/// # async fn example() -> nixie_lib::Result<()> {
/// let clock = Clock::http("192.168.4.1")?;
/// let mut panel = PanelState::new();
/// panel.refresh_all(&clock).await?;
///
/// let sliders = ColorSliders::new(30.0, 100.0, 80.0);
/// panel.apply_color(&clock, sliders).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    led: Option<LedInfo>,
    sleep: Option<SleepInfo>,
    time: Option<TimeInfo>,
    wifi: Option<WifiInfo>,
    time_zones: Option<TimeZoneCatalog>,
}

impl PanelState {
    /// Creates an empty panel state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Accessors ==========

    /// Returns the backlight settings, if loaded.
    #[must_use]
    pub fn led(&self) -> Option<&LedInfo> {
        self.led.as_ref()
    }

    /// Returns the sleep schedule, if loaded.
    #[must_use]
    pub fn sleep(&self) -> Option<&SleepInfo> {
        self.sleep.as_ref()
    }

    /// Returns the time settings, if loaded.
    #[must_use]
    pub fn time(&self) -> Option<&TimeInfo> {
        self.time.as_ref()
    }

    /// Returns the WiFi settings, if loaded.
    #[must_use]
    pub fn wifi(&self) -> Option<&WifiInfo> {
        self.wifi.as_ref()
    }

    /// Returns the time zone catalog, if loaded.
    #[must_use]
    pub fn time_zones(&self) -> Option<&TimeZoneCatalog> {
        self.time_zones.as_ref()
    }

    /// Returns the catalog entry of the clock's current zone.
    #[must_use]
    pub fn selected_time_zone(&self) -> Option<&TimeZone> {
        let time = self.time.as_ref()?;
        self.time_zones.as_ref()?.selected(time)
    }

    /// Returns slider positions showing the current backlight color.
    #[must_use]
    pub fn color_sliders(&self) -> Option<ColorSliders> {
        self.led.map(|led| ColorSliders::from_rgb(led.color()))
    }

    /// Returns the sleep form filled with the current schedule.
    #[must_use]
    pub fn sleep_form(&self) -> Option<SleepForm> {
        self.sleep.as_ref().map(SleepForm::from_info)
    }

    /// Returns the WiFi form filled with the current settings.
    #[must_use]
    pub fn wifi_form(&self) -> Option<WifiForm> {
        self.wifi.as_ref().map(WifiForm::from_info)
    }

    // ========== Loading ==========

    /// Loads every resource from the clock, concurrently.
    ///
    /// A failing resource does not stop the others from loading; it keeps
    /// its previous value.
    ///
    /// # Errors
    ///
    /// Returns the first error in [`Endpoint::ALL`](crate::Endpoint::ALL)
    /// order, after all loads completed.
    pub async fn refresh_all<P: Protocol>(&mut self, clock: &Clock<P>) -> Result<(), Error> {
        let (zones, time, sleep, led, wifi) = tokio::join!(
            clock.time_zones(),
            clock.time_info(),
            clock.sleep_info(),
            clock.led_info(),
            clock.wifi_info()
        );

        let mut first_error = None;
        keep_loaded(&mut self.time_zones, zones, "time zones", &mut first_error);
        keep_loaded(&mut self.time, time, "time info", &mut first_error);
        keep_loaded(&mut self.sleep, sleep, "sleep info", &mut first_error);
        keep_loaded(&mut self.led, led, "LED info", &mut first_error);
        keep_loaded(&mut self.wifi, wifi, "WiFi info", &mut first_error);
        first_error.map_or(Ok(()), Err)
    }

    /// Loads the backlight settings.
    ///
    /// # Errors
    ///
    /// Returns error if the clock cannot be read.
    pub async fn refresh_led<P: Protocol>(&mut self, clock: &Clock<P>) -> Result<(), Error> {
        let led = clock.led_info().await.inspect_err(|e| log_load_failure("LED info", e))?;
        self.led = Some(led);
        Ok(())
    }

    /// Loads the sleep schedule.
    ///
    /// # Errors
    ///
    /// Returns error if the clock cannot be read.
    pub async fn refresh_sleep<P: Protocol>(&mut self, clock: &Clock<P>) -> Result<(), Error> {
        let sleep = clock
            .sleep_info()
            .await
            .inspect_err(|e| log_load_failure("sleep info", e))?;
        self.sleep = Some(sleep);
        Ok(())
    }

    /// Loads the time settings.
    ///
    /// # Errors
    ///
    /// Returns error if the clock cannot be read.
    pub async fn refresh_time<P: Protocol>(&mut self, clock: &Clock<P>) -> Result<(), Error> {
        let time = clock
            .time_info()
            .await
            .inspect_err(|e| log_load_failure("time info", e))?;
        self.time = Some(time);
        Ok(())
    }

    /// Loads the WiFi settings.
    ///
    /// # Errors
    ///
    /// Returns error if the clock cannot be read.
    pub async fn refresh_wifi<P: Protocol>(&mut self, clock: &Clock<P>) -> Result<(), Error> {
        let wifi = clock
            .wifi_info()
            .await
            .inspect_err(|e| log_load_failure("WiFi info", e))?;
        self.wifi = Some(wifi);
        Ok(())
    }

    /// Loads the time zone catalog.
    ///
    /// # Errors
    ///
    /// Returns error if the clock cannot be read.
    pub async fn refresh_time_zones<P: Protocol>(
        &mut self,
        clock: &Clock<P>,
    ) -> Result<(), Error> {
        let zones = clock
            .time_zones()
            .await
            .inspect_err(|e| log_load_failure("time zones", e))?;
        tracing::debug!(count = zones.len(), "Loaded time zone catalog");
        self.time_zones = Some(zones);
        Ok(())
    }

    // ========== Editing ==========

    /// Picks a backlight mode locally; it is sent with the next color update.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotLoaded` if the LED info was never loaded.
    pub fn select_led_state(&mut self, state: LedState) -> Result<(), Error> {
        let led = self.led.as_mut().ok_or(Error::NotLoaded("LED info"))?;
        led.set_state(state);
        Ok(())
    }

    /// Sends the slider color, together with the selected mode, to the clock.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotLoaded` if the LED info was never loaded, or the
    /// request error.
    pub async fn apply_color<P: Protocol>(
        &mut self,
        clock: &Clock<P>,
        sliders: ColorSliders,
    ) -> Result<LedInfo, Error> {
        let led = self
            .led
            .ok_or(Error::NotLoaded("LED info"))?
            .with_color(sliders.to_rgb());
        clock.set_led_info(&led).await?;
        tracing::info!(color = %led.color(), state = %led.state(), "Backlight updated");
        self.led = Some(led);
        Ok(led)
    }

    /// Sends the time zone, display format and sleep schedule to the clock.
    ///
    /// Time settings are sent first; the schedule is only sent if they were
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotLoaded` if the time info was never loaded,
    /// `Error::Value` if the sleep form is invalid, or the request error.
    pub async fn apply_clock<P: Protocol>(
        &mut self,
        clock: &Clock<P>,
        zone: &TimeZone,
        time_format: TimeFormat,
        sleep: &SleepForm,
    ) -> Result<(), Error> {
        let mut time = self.time.clone().ok_or(Error::NotLoaded("time info"))?;
        let sleep = sleep.to_info()?;

        time.set_time_zone(zone);
        time.set_time_format(time_format);
        clock.set_time_info(&time).await?;
        tracing::info!(zone = %zone, format = %time_format, "Time settings updated");
        self.time = Some(time);

        clock.set_sleep_info(&sleep).await?;
        tracing::info!(schedule = %sleep, "Sleep schedule updated");
        self.sleep = Some(sleep);
        Ok(())
    }

    /// Validates the WiFi form and sends it to the clock.
    ///
    /// The clock restarts to join the new network after accepting it.
    ///
    /// # Errors
    ///
    /// Returns `Error::Value` if the form is invalid, or the request error.
    pub async fn apply_wifi<P: Protocol>(
        &mut self,
        clock: &Clock<P>,
        form: &WifiForm,
    ) -> Result<(), Error> {
        let wifi = form.validate()?;
        clock.set_wifi_info(&wifi).await?;
        tracing::info!(
            ssid = wifi.ssid(),
            hostname = wifi.hostname(),
            "WiFi updated, clock is restarting"
        );
        self.wifi = Some(wifi);
        Ok(())
    }
}

fn keep_loaded<T>(
    slot: &mut Option<T>,
    result: Result<T, Error>,
    what: &str,
    first_error: &mut Option<Error>,
) {
    match result {
        Ok(value) => *slot = Some(value),
        Err(error) => {
            log_load_failure(what, &error);
            first_error.get_or_insert(error);
        }
    }
}

fn log_load_failure(what: &str, error: &Error) {
    tracing::warn!(error = %error, "Failed to load {what}");
}
