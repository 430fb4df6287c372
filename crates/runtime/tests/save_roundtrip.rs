use game_core::{Character, Game, InventoryItem, PcgRng, Preset, ScriptedRng, Side};
use runtime::{FileSaveRepository, GameSession, RepositoryError, RuntimeError, SaveRepository};
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Save → load round trip through a real file.
///
/// 1. Build a roster with two presets and equipment
/// 2. Fight a battle so health and experience move off their defaults
/// 3. Save to disk and load into a fresh session
/// 4. Verify every persisted field and the lossy preset
#[test]
fn test_battle_then_save_and_load() {
    init_tracing();
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("arena.json");

    let mut session = GameSession::new(Game::new(), PcgRng::seeded(7));
    let conan = session.add_character(Character::warrior("Conan"));
    let merlin = session.add_character(Character::mage("Merlin"));
    session
        .equip(conan, InventoryItem::new("Sword", "weapon").with_attack_bonus(3))
        .expect("equip sword");
    session
        .equip(merlin, InventoryItem::new("Robe", "armor").with_defense_bonus(2))
        .expect("equip robe");

    let report = session.battle(conan, merlin).expect("battle finishes");
    let winner = match report.winner {
        Side::First => conan,
        Side::Second => merlin,
    };

    session.save_to(&path).expect("save");

    let mut restored = GameSession::new(Game::new(), PcgRng::seeded(8));
    assert_eq!(restored.load_from(&path).expect("load"), 2);

    for index in [conan, merlin] {
        let before = session.character(index).unwrap();
        let after = restored.character(index).unwrap();

        assert_eq!(after.name(), before.name());
        assert_eq!(after.level(), before.level());
        assert_eq!(after.health(), before.health());
        assert_eq!(after.attack(), before.attack());
        assert_eq!(after.defense(), before.defense());
        assert_eq!(after.experience(), before.experience());
        assert_eq!(after.inventory().items(), before.inventory().items());
        assert_eq!(
            after.inventory().total_attack_bonus(),
            before.inventory().total_attack_bonus()
        );
        assert_eq!(after.preset(), Preset::Adventurer);
    }

    assert_eq!(restored.character(winner).unwrap().experience(), 10);
}

#[test]
fn test_single_warrior_item_survives_round_trip() {
    init_tracing();
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("warrior.json");

    let mut session = GameSession::new(Game::new(), ScriptedRng::new());
    let index = session.add_character(Character::warrior("Conan"));
    let shield = InventoryItem::new("Shield", "armor").with_bonuses(1, 4);
    session.equip(index, shield.clone()).unwrap();
    session.save_to(&path).unwrap();

    let mut fresh = GameSession::new(Game::new(), ScriptedRng::new());
    fresh.load_from(&path).unwrap();

    let items = fresh.character(0).unwrap().inventory().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name(), "Shield");
    assert_eq!(items[0].item_type(), "armor");
    assert_eq!(items[0].attack_bonus(), 1);
    assert_eq!(items[0].defense_bonus(), 4);
    assert_eq!(items[0], shield);
}

#[test]
fn test_save_file_written_in_documented_shape() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("shape.json");

    let mut session = GameSession::new(Game::new(), ScriptedRng::new());
    session.add_character(Character::paladin("Uther"));
    session.save_to(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let uther = &value["characters"][0];
    assert_eq!(uther["name"], "Uther");
    assert_eq!(uther["attack"], 14);
    assert_eq!(uther["defense"], 8);
    assert_eq!(uther["inventory"], serde_json::json!([]));
    assert!(value.get("version").is_none());
}

#[test]
fn test_load_failures_are_surfaced() {
    let temp_dir = TempDir::new().expect("temp dir");

    let mut session = GameSession::new(Game::new(), ScriptedRng::new());
    session.add_character(Character::rogue("Vex"));

    let missing = session.load_from(temp_dir.path().join("missing.json"));
    assert!(matches!(
        missing,
        Err(RuntimeError::Repository(RepositoryError::NotFound { .. }))
    ));

    let garbage = temp_dir.path().join("garbage.json");
    std::fs::write(&garbage, "not json at all").unwrap();
    let parsed = session.load_from(&garbage);
    assert!(matches!(
        parsed,
        Err(RuntimeError::Repository(RepositoryError::Json(_)))
    ));

    let overflowing = temp_dir.path().join("overflowing.json");
    std::fs::write(
        &overflowing,
        r#"{"characters":[{"name":"Broken","level":1,"health":100.0,
            "attack":-2147483648,"defense":5,"experience":0,
            "inventory":[{"name":"Pin","type":"weapon","attack_bonus":1,"defense_bonus":0}]}]}"#,
    )
    .unwrap();
    let restored = session.load_from(&overflowing);
    assert!(matches!(
        restored,
        Err(RuntimeError::Repository(RepositoryError::InvalidRecord(_)))
    ));

    assert_eq!(session.game().len(), 1);
}

#[test]
fn test_repository_trait_object() {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo: Box<dyn SaveRepository> =
        Box::new(FileSaveRepository::new(temp_dir.path().join("boxed.json")));

    let mut session = GameSession::new(Game::new(), ScriptedRng::new());
    session.add_character(Character::new("Plain"));
    session.save(repo.as_ref()).unwrap();
    assert!(repo.exists());

    let mut other = GameSession::new(Game::new(), ScriptedRng::new());
    assert_eq!(other.load(repo.as_ref()).unwrap(), 1);
}
