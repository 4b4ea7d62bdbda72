//! Bindings to the host platform bridge (`window.Telegram.WebApp`).
//!
//! Every access probes for the bridge object first. When the app runs in a
//! plain browser all operations degrade to no-ops or browser fallbacks, so
//! callers never need to distinguish the two environments.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use pokerclub_api::bridge::RegistrationNotice;
use pokerclub_api::id::UserId;
use pokerclub_api::users::User;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("the host bridge is not available")]
    Unavailable,
    #[error("failed to encode payload: {0}")]
    Encode(#[from] pokerclub_api::Error),
    #[error("the host rejected the call: {0:?}")]
    Call(JsValue),
}

fn web_app() -> Option<JsValue> {
    let window: JsValue = gloo_utils::window().into();

    let telegram = Reflect::get(&window, &JsValue::from_str("Telegram")).ok()?;
    if telegram.is_undefined() || telegram.is_null() {
        return None;
    }

    let web_app = Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
    if web_app.is_undefined() || web_app.is_null() {
        return None;
    }

    Some(web_app)
}

fn call0(target: &JsValue, name: &str) -> Result<JsValue, BridgeError> {
    let func = Reflect::get(target, &JsValue::from_str(name)).map_err(BridgeError::Call)?;
    let func: Function = func.dyn_into().map_err(|_| BridgeError::Unavailable)?;

    func.call0(target).map_err(BridgeError::Call)
}

fn call1(target: &JsValue, name: &str, arg: &JsValue) -> Result<JsValue, BridgeError> {
    let func = Reflect::get(target, &JsValue::from_str(name)).map_err(BridgeError::Call)?;
    let func: Function = func.dyn_into().map_err(|_| BridgeError::Unavailable)?;

    func.call1(target, arg).map_err(BridgeError::Call)
}

/// Returns `true` if the app runs embedded in the host platform.
pub fn is_embedded() -> bool {
    web_app().is_some()
}

/// Expands the web view to full height. No-op outside the host.
pub fn expand() {
    if let Some(web_app) = web_app() {
        if let Err(err) = call0(&web_app, "expand") {
            log::debug!("Failed to expand web view: {:?}", err);
        }
    }
}

/// Returns the identity supplied by the host, if any.
pub fn user() -> Option<User> {
    let web_app = web_app()?;

    let init_data = Reflect::get(&web_app, &JsValue::from_str("initDataUnsafe")).ok()?;
    let user = Reflect::get(&init_data, &JsValue::from_str("user")).ok()?;
    if user.is_undefined() || user.is_null() {
        return None;
    }

    match serde_wasm_bindgen::from_value(user) {
        Ok(user) => Some(user),
        Err(err) => {
            log::warn!("Failed to decode host identity: {}", err);
            None
        }
    }
}

/// Synthesizes the identity used when running outside the host platform.
pub fn demo_user() -> User {
    User {
        id: UserId((js_sys::Math::random() * 1_000_000.0) as u64),
        first_name: String::from("Demo"),
        last_name: Some(String::from("User")),
        username: None,
    }
}

/// Delivers `notice` to the host bot.
///
/// Fire-and-forget: the host sends no response and none is awaited.
pub fn send_data(notice: &RegistrationNotice) -> Result<(), BridgeError> {
    let web_app = web_app().ok_or(BridgeError::Unavailable)?;
    let payload = notice.to_json()?;

    call1(&web_app, "sendData", &JsValue::from_str(&payload))?;
    Ok(())
}

#[derive(Copy, Clone, Debug)]
pub enum HapticKind {
    Success,
    Warning,
    Error,
}

impl HapticKind {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Fires a notification haptic. Best effort.
pub fn haptic_notification(kind: HapticKind) {
    let Some(web_app) = web_app() else { return };

    let Ok(haptic) = Reflect::get(&web_app, &JsValue::from_str("HapticFeedback")) else {
        return;
    };
    if haptic.is_undefined() {
        return;
    }

    if let Err(err) = call1(&haptic, "notificationOccurred", &JsValue::from_str(kind.as_str())) {
        log::debug!("Haptic feedback failed: {:?}", err);
    }
}

/// Shows a blocking alert through the host, or `window.alert` outside it.
pub fn show_alert(text: &str) {
    if let Some(web_app) = web_app() {
        if call1(&web_app, "showAlert", &JsValue::from_str(text)).is_ok() {
            return;
        }
    }

    let _ = gloo_utils::window().alert_with_message(text);
}

/// Opens `url` through the host, or in a new tab outside it.
pub fn open_link(url: &str) {
    if let Some(web_app) = web_app() {
        if call1(&web_app, "openTelegramLink", &JsValue::from_str(url)).is_ok() {
            return;
        }
    }

    let _ = gloo_utils::window().open_with_url_and_target(url, "_blank");
}
