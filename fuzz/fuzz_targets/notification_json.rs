#![no_main]
use libfuzzer_sys::fuzz_target;
use toastkit::{Notification, Payload, WriterConfig};

fuzz_target!(|data: &[u8]| {
    if let Ok(notification) = serde_json::from_slice::<Notification>(data) {
        if let Ok(xml) = notification.to_xml() {
            assert!(xml.starts_with(&format!("<{}", notification.kind())));
        }
        let _ = notification.to_xml_with_config(&WriterConfig::pretty(2));
    }
});
