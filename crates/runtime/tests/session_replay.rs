use std::fs;
use std::path::PathBuf;

use rpg_content::{ContentFactory, SessionScript};
use rpg_core::{GameError, ItemId};
use rpg_runtime::{HostEngine, RuntimeError, Session};

fn shipped_data() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
}

/// Replays the bundled demo script and checks every observable outcome.
#[test]
fn bundled_session_replays_deterministically() {
    let factory = shipped_data();
    let config = factory.load_config().expect("config should load");
    let catalog = factory.load_items().expect("catalog should load");
    let script = factory.load_script("session.ron").expect("script should load");

    let engine = HostEngine::with_dummies(3);
    let report = Session::new(&config, &catalog)
        .strict(true)
        .run(&engine, &script)
        .expect("bundled script only names catalog items");

    let stats = report.stats.expect("stats are always reported");
    assert_eq!(stats.armour, 60);
    assert_eq!(stats.health, 120);
    assert_eq!(stats.carrying_capacity, 400);

    assert_eq!(report.pickups_accepted, 6);
    assert_eq!(report.pickups_rejected, 2);
    assert_eq!(report.damage_taken, 90);
    assert_eq!(report.enemies_struck, 3);
    assert_eq!(
        report.items.iter().map(|item| item.id()).collect::<Vec<_>>(),
        vec![ItemId(1), ItemId(2), ItemId(5), ItemId(6)]
    );
    assert_eq!(
        report.effects,
        vec![
            "cool_swirly_particles",
            "blue_swirly",
            "parry",
            "lots_of_gore",
            "cool_swirly_particles",
            "green_swirly",
            "cool_swirly_particles",
            "green_swirly",
            "lots_of_gore",
        ]
    );
    assert!(engine.enemies().iter().all(|dummy| dummy.health() == 150));
}

#[test]
fn collect_all_never_stores_consumables() {
    let factory = shipped_data();
    let config = factory.load_config().unwrap();
    let catalog = factory.load_items().unwrap();
    let script = SessionScript::collect_all(catalog.ids());

    let engine = HostEngine::new();
    let report = Session::new(&config, &catalog).run(&engine, &script).unwrap();

    assert!(report.items.iter().all(|item| !item.is_consumable()));
    assert_eq!(report.stats.unwrap().health, config.max_health);
}

#[test]
fn strict_session_rejects_script_from_other_catalog() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("items.ron"),
        r#"(items: [(id: 1, name: "Pebble", weight: 1)])"#,
    )
    .unwrap();
    fs::create_dir(dir.path().join("scripts")).unwrap();
    fs::write(
        dir.path().join("scripts").join("bad.ron"),
        "(commands: [Pickup(1), Pickup(2)])",
    )
    .unwrap();

    let factory = ContentFactory::new(dir.path());
    let config = factory.load_config().unwrap();
    let catalog = factory.load_items().unwrap();
    let script = factory.load_script("bad.ron").unwrap();

    let err = Session::new(&config, &catalog)
        .strict(true)
        .run(&HostEngine::new(), &script)
        .unwrap_err();

    assert_eq!(err, RuntimeError::UnknownItem { index: 1, id: ItemId(2) });
    assert_eq!(err.error_code(), "RUNTIME_UNKNOWN_ITEM");
}
