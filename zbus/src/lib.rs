// SPDX-License-Identifier: MPL-2.0

use serde::{Deserialize, Serialize};
use zvariant::Type;

/// Transition parameters accepted by clightd's backlight calls.
#[derive(Deserialize, Serialize, Type, Debug, Clone, Copy, PartialEq)]
pub struct BacklightSmooth {
    pub enabled: bool,
    pub step: f64,
    pub duration: u32,
}

#[zbus::dbus_proxy(
    interface = "org.clight.clight",
    default_service = "org.clight.clight",
    default_path = "/org/clight/clight"
)]
trait Clight {
    /// IncBl method
    fn inc_bl(&self, step: f64) -> zbus::Result<()>;

    /// DecBl method
    fn dec_bl(&self, step: f64) -> zbus::Result<()>;

    /// BlPct property
    #[dbus_proxy(property)]
    fn bl_pct(&self) -> zbus::Result<f64>;
}

#[zbus::dbus_proxy(
    interface = "org.clight.clight.Conf.Backlight",
    default_service = "org.clight.clight",
    default_path = "/org/clight/clight/Conf/Backlight"
)]
trait BacklightConf {
    /// NoSmooth property
    #[dbus_proxy(property)]
    fn no_smooth(&self) -> zbus::Result<bool>;

    /// TransStep property
    #[dbus_proxy(property)]
    fn trans_step(&self) -> zbus::Result<f64>;

    /// TransDuration property
    #[dbus_proxy(property)]
    fn trans_duration(&self) -> zbus::Result<u32>;
}

#[zbus::dbus_proxy(
    interface = "org.clightd.clightd.Backlight",
    default_service = "org.clightd.clightd",
    default_path = "/org/clightd/clightd/Backlight"
)]
trait ClightdBacklight {
    /// SetAll method
    fn set_all(&self, target: f64, smooth: &BacklightSmooth, selector: &str) -> zbus::Result<()>;
}
