//! SiteManager — a local-first website collection manager.
//!
//! Entry point: runs an interactive console demo exercising every component
//! against an in-memory store.

use sitemanager::app::App;
use sitemanager::managers::auth_manager::AuthManagerTrait;
use sitemanager::managers::collection_manager::CollectionManagerTrait;
use sitemanager::services::roi_calculator::{RoiCalculator, RoiCalculatorTrait};
use sitemanager::store::{LocalStore, StorageBackend};

fn main() {
    env_logger::init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              SiteManager v{} — Demo Mode                  ║", env!("CARGO_PKG_VERSION"));
    println!("║     Local-first website collection manager                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_store();
    demo_auth();
    demo_collections();
    demo_detached();
    demo_hydration();
    demo_roi();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_store() {
    section("Storage Layer");

    let store = LocalStore::open_in_memory().expect("failed to open in-memory store");
    store.set("demo-key", "\"hello\"").expect("set failed");
    println!("  Stored 'demo-key' = {:?}", store.get("demo-key").unwrap());
    store.remove("demo-key").expect("remove failed");
    println!("  After remove: {:?}", store.get("demo-key").unwrap());
    println!();
}

fn demo_auth() {
    section("Login Gate");

    let mut app = App::open_in_memory().expect("failed to open app");
    println!("  Logged in initially: {}", app.auth.is_logged_in());
    app.auth.login("guest@local").expect("login failed");
    println!(
        "  After login: logged_in={}, email={:?}",
        app.auth.is_logged_in(),
        app.auth.user_email()
    );
    app.auth.logout();
    println!("  After logout: logged_in={}", app.auth.is_logged_in());
    println!();
}

fn demo_collections() {
    section("Lists & Sites");

    let mut app = App::open_in_memory().expect("failed to open app");

    let dev = app.collections.add_list("Development Resources").expect("add_list failed");
    let news = app.collections.add_list("News").expect("add_list failed");
    println!("  Created {} lists; active = {:?}", app.collections.lists().len(),
        app.collections.active_list().map(|l| l.name.as_str()));

    app.collections
        .add_site("GitHub", "https://github.com", "Development")
        .expect("add_site failed");
    app.collections
        .add_site("Rust", "https://rust-lang.org", "")
        .expect("add_site failed");
    for site in app.collections.sites_in_list(&dev) {
        println!("  Site: {} ({}) [{}]", site.name, site.url, site.category);
    }

    match app.collections.add_site("Bad", "not-a-url", "") {
        Err(e) => println!("  Rejected invalid URL: {}", e),
        Ok(_) => unreachable!(),
    }

    app.collections.remove_list(&dev).expect("remove_list failed");
    println!(
        "  Removed active list; cascade left {} sites; active moved to News: {}",
        app.collections.sites().len(),
        app.collections.active_list_id() == Some(news.as_str())
    );
    println!();
}

fn demo_detached() {
    section("Detached Mode");

    let mut app = App::detached();
    app.collections.add_list("Scratch").expect("add_list failed");
    app.auth.login("guest@local").expect("login failed");
    println!(
        "  No store attached; state held in memory only ({} list(s), logged_in={})",
        app.collections.lists().len(),
        app.auth.is_logged_in()
    );
    println!();
}

fn demo_hydration() {
    section("Persistence & Hydration");

    use std::sync::Arc;
    use sitemanager::managers::collection_manager::CollectionManager;

    let store: Arc<dyn StorageBackend> =
        Arc::new(LocalStore::open_in_memory().expect("failed to open in-memory store"));

    {
        let mut collections = CollectionManager::new(store.clone());
        collections.add_list("My Websites").expect("add_list failed");
        collections
            .add_site("Example", "https://example.com", "")
            .expect("add_site failed");
    }

    // A fresh manager over the same store restores everything
    let rehydrated = CollectionManager::new(store);
    println!(
        "  Rehydrated {} list(s), {} site(s), active = {:?}",
        rehydrated.lists().len(),
        rehydrated.sites().len(),
        rehydrated.active_list().map(|l| l.name.as_str())
    );
    println!(
        "  createdAt survived as a date: {}",
        rehydrated.lists()[0].created_at
    );
    println!();
}

fn demo_roi() {
    section("ROI Calculator");

    let calc = RoiCalculator::new();
    let roi = calc.calculate(10_000.0, 15_000.0, 2_000.0).expect("calculate failed");
    println!("  ROI(10000, 15000, 2000) = {}", calc.format_roi(roi));
    match calc.calculate(0.0, 100.0, 50.0) {
        Err(e) => println!("  Rejected: {}", e),
        Ok(_) => unreachable!(),
    }
    println!();
}
