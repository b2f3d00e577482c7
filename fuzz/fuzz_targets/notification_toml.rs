#![no_main]
use libfuzzer_sys::fuzz_target;
use toastkit::{Notification, Payload};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(notification) = toml::from_str::<Notification>(s) {
            let _ = notification.to_xml();
        }
    }
});
