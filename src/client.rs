// Copyright 2018-2021 System76 <info@system76.com>
//
// SPDX-License-Identifier: GPL-3.0-only

use clight_ctl_zbus::{BacklightConfProxy, BacklightSmooth, ClightProxy, ClightdBacklightProxy};
use log::debug;
use zbus::Connection;

/// Transition values handed to clightd in place of the ones clight reports.
const TRANS_STEP: f64 = 0.05;
const TRANS_DURATION: u32 = 1;

/// Empty selector, addressing every backlight device clightd knows about.
const ALL_DISPLAYS: &str = "";

/// Client for the clight session daemon and the clightd system daemon.
///
/// Each bus is connected at most once per process, on first use, and both
/// handles live until the process exits.
pub struct ClightClient {
    session: Option<Connection>,
    system: Option<Connection>,
}

impl ClightClient {
    pub fn new() -> Self { ClightClient { session: None, system: None } }

    /// Talks to the daemons over pre-established connections instead of the
    /// session and system buses.
    pub fn with_connections(session: Connection, system: Connection) -> Self {
        ClightClient { session: Some(session), system: Some(system) }
    }

    /// Reads the current backlight level as a percentage.
    pub async fn backlight(&mut self) -> zbus::Result<i32> {
        let clight = ClightProxy::new(self.session_bus().await?).await?;
        let fraction = clight.bl_pct().await?;
        Ok(to_percent(fraction))
    }

    /// Sets the backlight level on every display, using the smooth-transition
    /// flag reported by clight's backlight configuration.
    pub async fn set_backlight(&mut self, value: i32) -> zbus::Result<()> {
        let conf = BacklightConfProxy::new(self.session_bus().await?).await?;
        let smooth = BacklightSmooth {
            enabled: !conf.no_smooth().await?,
            step: conf.trans_step().await?,
            duration: conf.trans_duration().await?,
        };

        // TODO: decide whether the TransStep and TransDuration values that
        // clight reports can be trusted; until then they are discarded in
        // favor of fixed ones.
        let smooth = BacklightSmooth { step: TRANS_STEP, duration: TRANS_DURATION, ..smooth };

        debug!("setting backlight to {}% with {:?}", value, smooth);

        let backlight = ClightdBacklightProxy::new(self.system_bus().await?).await?;
        backlight.set_all(to_fraction(value), &smooth, ALL_DISPLAYS).await
    }

    /// Raises the backlight level by a percentage step.
    pub async fn increase_backlight(&mut self, value: i32) -> zbus::Result<()> {
        debug!("raising backlight by {}%", value);
        let clight = ClightProxy::new(self.session_bus().await?).await?;
        clight.inc_bl(to_fraction(value)).await
    }

    /// Lowers the backlight level by a percentage step.
    pub async fn decrease_backlight(&mut self, value: i32) -> zbus::Result<()> {
        debug!("lowering backlight by {}%", value);
        let clight = ClightProxy::new(self.session_bus().await?).await?;
        clight.dec_bl(to_fraction(value)).await
    }

    async fn session_bus(&mut self) -> zbus::Result<&Connection> {
        match self.session {
            Some(ref bus) => Ok(bus),
            None => {
                debug!("connecting to the session bus");
                Ok(self.session.insert(Connection::session().await?))
            }
        }
    }

    async fn system_bus(&mut self) -> zbus::Result<&Connection> {
        match self.system {
            Some(ref bus) => Ok(bus),
            None => {
                debug!("connecting to the system bus");
                Ok(self.system.insert(Connection::system().await?))
            }
        }
    }
}

impl Default for ClightClient {
    fn default() -> Self { Self::new() }
}

fn to_percent(fraction: f64) -> i32 { (fraction * 100.0).round() as i32 }

fn to_fraction(percent: i32) -> f64 { f64::from(percent) / 100.0 }
