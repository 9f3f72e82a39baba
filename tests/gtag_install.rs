#![cfg(not(target_arch = "wasm32"))]

use ads_gtag::gtag::{
    gtag_plugin, gtag_plugin_with_config, install, track, GtagCommand, GtagConfig, ScriptTag,
};
use ads_gtag::platform::MemoryPage;
use ads_gtag::plugin::{Plugin, PluginHost, PluginMode};
use serde_json::json;

const VENDOR_URL: &str = "https://www.googletagmanager.com/gtag/js?id=AW-648113111";

#[test]
fn server_render_leaves_page_untouched() {
    let page = MemoryPage::server();
    install(&page);

    assert!(page.head_scripts().is_empty());
    assert!(page.global_names().is_empty());
}

#[test]
fn browser_page_gets_script_queue_and_function() {
    let page = MemoryPage::browser();
    install(&page);

    assert_eq!(page.head_scripts(), vec![ScriptTag::async_src(VENDOR_URL)]);
    assert_eq!(
        page.global_names(),
        vec!["dataLayer".to_string(), "gtag".to_string()]
    );

    let queue = page.data_layer("dataLayer").unwrap().to_json();
    let entries = queue.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0][0], json!("js"));
    assert!(entries[0][1].as_str().unwrap().ends_with('Z'));
    assert_eq!(entries[1], json!(["config", "AW-648113111"]));
}

#[test]
fn later_calls_land_after_bootstrap() {
    let page = MemoryPage::browser();
    install(&page);

    track(
        &page,
        GtagCommand::Raw(vec![
            json!("event"),
            json!("conversion"),
            json!({"send_to": "AW-648113111/label"}),
        ]),
    )
    .unwrap();

    let layer = page.data_layer("dataLayer").unwrap();
    let kinds: Vec<_> = layer
        .entries()
        .iter()
        .map(|entry| entry.kind().unwrap_or_default().to_string())
        .collect();
    assert_eq!(kinds, ["js", "config", "event"]);
}

#[test]
fn plugin_host_runs_loader_on_client_only() {
    let mut host = PluginHost::new();
    assert!(host.register(gtag_plugin()));
    assert!(host.register(Plugin::new("noop", PluginMode::Universal, |_page| {})));

    let server = MemoryPage::server();
    assert_eq!(host.run(&server), vec!["noop".to_string()]);
    assert!(server.head_scripts().is_empty());

    let browser = MemoryPage::browser();
    assert_eq!(
        host.run(&browser),
        vec!["gtag".to_string(), "noop".to_string()]
    );
    assert_eq!(browser.head_scripts().len(), 1);
    assert_eq!(browser.data_layer("dataLayer").unwrap().len(), 2);
}

#[test]
fn plugin_config_from_json() {
    let config = GtagConfig::from_json(r#"{"tagId":"AW-42"}"#).unwrap();
    let page = MemoryPage::browser();
    gtag_plugin_with_config(config).apply(&page);

    assert_eq!(
        page.head_scripts()[0].src,
        "https://www.googletagmanager.com/gtag/js?id=AW-42"
    );
    assert_eq!(
        page.data_layer("dataLayer").unwrap().last(),
        Some(GtagCommand::config("AW-42"))
    );
}
