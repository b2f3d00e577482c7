use std::fs;
use std::path::Path;
use toastkit::{Notification, Payload};

fn render(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let notification: Notification = serde_json::from_str(&content)?;
    Ok(notification.to_xml()?)
}

#[test]
fn test_valid_fixtures() -> Result<(), Box<dyn std::error::Error>> {
    let valid_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/valid");
    for entry in fs::read_dir(valid_dir)? {
        let path = entry?.path();
        match render(&path) {
            Ok(xml) => assert!(xml.starts_with('<'), "{path:?} rendered {xml}"),
            Err(e) => {
                return Err(
                    std::io::Error::other(format!("Failed to render valid file {path:?}: {e}"))
                        .into(),
                );
            }
        }
    }
    Ok(())
}

#[test]
fn test_invalid_fixtures() -> Result<(), Box<dyn std::error::Error>> {
    let invalid_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/invalid");
    for entry in fs::read_dir(invalid_dir)? {
        let path = entry?.path();
        if let Ok(xml) = render(&path) {
            return Err(std::io::Error::other(format!(
                "Should fail to render invalid file {path:?}, got {xml}"
            ))
            .into());
        }
    }
    Ok(())
}

#[test]
fn test_people_fixture_output() -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/valid/tile_people.json");
    assert_eq!(
        render(&path)?,
        concat!(
            r#"<tile><visual branding="nameAndLogo" displayName="People">"#,
            r#"<binding template="TileMedium" hint-presentation="people">"#,
            r#"<image src="Assets/People/1.jpg"/><image src="Assets/People/2.jpg"/></binding>"#,
            r#"<binding template="TileWide" hint-presentation="people">"#,
            r#"<image src="Assets/People/1.jpg"/><image src="Assets/People/2.jpg"/><image src="Assets/People/3.jpg"/></binding>"#,
            "</visual></tile>"
        )
    );
    Ok(())
}

#[test]
fn test_reminder_fixture_output() -> Result<(), Box<dyn std::error::Error>> {
    let path =
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/valid/toast_reminder.json");
    let xml = render(&path)?;
    assert!(xml.starts_with(concat!(
        r#"<toast launch="action=viewEvent&amp;eventId=1983" "#,
        r#"displayTimestamp="2024-05-06T15:00:00+02:00" scenario="reminder">"#
    )));
    assert!(xml.ends_with(concat!(
        r#"<audio silent="true"/><actions hint-systemCommands="SnoozeAndDismiss"/>"#,
        r#"<header id="meetings" title="Meetings" arguments="action=openHeader"/></toast>"#
    )));
    Ok(())
}
