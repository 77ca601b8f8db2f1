use d2txt_data::{Dataset, StringTables};
use d2txt_describe::lookup::{item_type_is_of_type, items_matching_types, type_is_of_type};
use d2txt_describe::{Context, Localizer, RenderConfig};
use d2txt_types::PropertyReference;
use std::path::Path;

const EXCEL_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../testdata/excel");
const STRINGS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../testdata/strings");

struct Fixture {
    data: Dataset,
    strings: Localizer,
    config: RenderConfig,
}

impl Fixture {
    fn load() -> Self {
        let data = Dataset::load_dir(Path::new(EXCEL_DIR)).expect("load excel dir");
        let tables = StringTables::load_dir(Path::new(STRINGS_DIR)).expect("load strings");
        Self {
            data,
            strings: Localizer::new(tables),
            config: RenderConfig::default(),
        }
    }

    fn ctx(&self) -> Context<'_> {
        Context::new(&self.data, &self.strings, &self.config)
    }

    fn unique(&self, index: &str) -> Vec<String> {
        let unique = self.data.unique(index).expect("unique in fixtures");
        self.ctx().describe_unique(unique)
    }
}

#[test]
fn harlequin_crest() {
    let f = Fixture::load();
    assert_eq!(
        f.unique("Harlequin Crest"),
        vec![
            "+[1-148] Defense (Based on Character Level)",
            "+2 to Strength",
            "+2 to Dexterity",
            "All Resistances +10",
        ]
    );
}

#[test]
fn azurewrath() {
    let f = Fixture::load();
    assert_eq!(
        f.unique("Azurewrath"),
        vec![
            "+[230-270]% Enhanced Damage",
            "Indestructible",
            "Level [10-13] Might Aura When Equipped",
            "Adds 250-500 magic damage",
            "Socketed (2)",
        ]
    );
}

#[test]
fn nagelring_keeps_unhandled_diagnostic() {
    let f = Fixture::load();
    assert_eq!(
        f.unique("Nagelring"),
        vec![
            "10% Chance to cast level 3 Fire Bolt on striking",
            "Fire Resist +15%",
            "Lightning Resist +15%",
            "<descfunc 99 unhandled for item_bogus>",
        ]
    );
}

#[test]
fn skill_monster_and_class_lookups() {
    let f = Fixture::load();
    assert_eq!(
        f.unique("Spirit Ward"),
        vec![
            "+2 to Fire Skills (Sorceress Only)",
            "+1 to Sorceress Skill Levels",
            "Adds 30-60 poison damage over 3 seconds",
            "+1 to Fire Bolt (Sorceress Only)",
            "+3 to Teleport",
            "+50 Defense (Increases near Day)",
            "+50% to Attack Rating versus Undead",
            "10% Reanimate as: Fallen",
            "Level 3 Teleport (20/20 Charges)",
            "Repairs 1 Durability in 20 Seconds",
        ]
    );
}

#[test]
fn set_item_and_set() {
    let f = Fixture::load();
    let ctx = f.ctx();

    let item = ctx.describe_set_item(&f.data.set_items[0]);
    assert_eq!(item.properties, vec!["+15 to Life", "Cold Resist +25%"]);
    assert_eq!(
        item.bonuses,
        vec![
            (2, vec!["+15 to Strength".to_string()]),
            (3, vec!["Poison Resist +25%".to_string()]),
        ]
    );

    let set = ctx.describe_set(&f.data.sets[0]);
    assert_eq!(set.partial, vec![(2, vec!["Fire Resist +25%".to_string()])]);
    assert_eq!(set.full, vec!["+15 to Strength", "All Resistances +15"]);
    assert_eq!(
        f.strings.get(&f.data.sets[0].name),
        "{color:green}Civerb's Vestments"
    );
}

#[test]
fn runeword() {
    let f = Fixture::load();
    let steel = f
        .data
        .runewords
        .iter()
        .find(|rw| rw.is_complete())
        .expect("complete runeword");
    let desc = f.ctx().describe_runeword(steel);
    assert_eq!(desc.name, "Steel");
    assert_eq!(desc.runes, vec!["Tal Rune", "El Rune"]);
    assert_eq!(
        desc.properties,
        vec!["+20% Enhanced Damage", "+3 damage", "+15 Maximum Durability"]
    );
}

#[test]
fn affixes_and_gems() {
    let f = Fixture::load();
    let ctx = f.ctx();
    let prefixes: Vec<Vec<String>> = f.data.prefixes.iter().map(|a| ctx.describe_affix(a)).collect();
    assert_eq!(
        prefixes,
        vec![vec!["+30% Enhanced Defense"], vec!["+[10-20]% Enhanced Damage"]]
    );
    let suffixes: Vec<Vec<String>> = f.data.suffixes.iter().map(|a| ctx.describe_affix(a)).collect();
    assert_eq!(suffixes, vec![vec!["+[1-2] to Strength"], vec!["+[1-5] to Life"]]);

    let gem = ctx.describe_gem(&f.data.gems[0]);
    assert_eq!(gem.weapon, vec!["Adds 1-3 cold damage"]);
    assert_eq!(gem.helm, vec!["+10 to Life"]);
    assert_eq!(gem.shield, vec!["Cold Resist +12%"]);
}

#[test]
fn equal_references_combine() {
    let f = Fixture::load();
    let refs = [
        PropertyReference::new("str", "", 5.0, 10.0),
        PropertyReference::new("str", "", 5.0, 10.0),
    ];
    assert_eq!(f.ctx().describe(&refs), vec!["+[10-20] to Strength"]);
}

#[test]
fn encoded_stats_do_not_combine() {
    let f = Fixture::load();
    let refs = [
        PropertyReference::new("hit-skill", "Fire Bolt", 10.0, 3.0),
        PropertyReference::new("hit-skill", "Fire Bolt", 10.0, 3.0),
    ];
    assert_eq!(f.ctx().describe(&refs).len(), 2);
}

#[test]
fn group_needs_every_member_with_equal_values() {
    let f = Fixture::load();
    let ctx = f.ctx();
    let res = |code: &str, v: f64| PropertyReference::new(code, "", v, v);

    let three = ctx.describe(&[res("res-fire", 5.0), res("res-ltng", 5.0), res("res-cold", 5.0)]);
    assert_eq!(three.len(), 3);

    let uneven = ctx.describe(&[res("res-all", 5.0), res("res-fire", 1.0)]);
    assert_eq!(uneven.len(), 4);
    assert!(!uneven.iter().any(|l| l.starts_with("All Resistances")));

    let complete = ctx.describe(&[
        res("res-fire", 5.0),
        res("res-ltng", 5.0),
        res("res-cold", 5.0),
        res("res-pois", 5.0),
    ]);
    assert_eq!(complete, vec!["All Resistances +5"]);
}

#[test]
fn fire_damage_pair() {
    let f = Fixture::load();
    let ctx = f.ctx();
    let pair = |min: f64, max: f64| {
        ctx.describe(&[
            PropertyReference::new("fire-min", "", min, min),
            PropertyReference::new("fire-max", "", max, max),
        ])
    };
    assert_eq!(pair(4.0, 4.0), vec!["+4 fire damage"]);
    assert_eq!(pair(4.0, 9.0), vec!["Adds 4-9 fire damage"]);
}

#[test]
fn unresolved_references_are_dropped() {
    let f = Fixture::load();
    let refs = [
        PropertyReference::new("str", "", 1.0, 1.0),
        PropertyReference::new("not-a-property", "", 1.0, 1.0),
        PropertyReference::new("inert", "", 1.0, 1.0),
        PropertyReference::new("badval", "", 1.0, 1.0),
    ];
    assert_eq!(f.ctx().describe(&refs), vec!["+1 to Strength"]);
}

#[test]
fn ethereal_always_last() {
    let f = Fixture::load();
    let refs = [
        PropertyReference::new("ethereal", "", 0.0, 0.0),
        PropertyReference::new("sock", "", 1.0, 1.0),
        PropertyReference::new("bloody", "", 1.0, 1.0),
    ];
    let lines = f.ctx().describe(&refs);
    assert_eq!(lines.last().map(String::as_str), Some("Ethereal (Cannot be Repaired)"));
    assert_eq!(lines.len(), 3);
}

#[test]
fn type_equivalence_walk() {
    let f = Fixture::load();
    let data = &f.data;
    assert!(type_is_of_type(data, "circ", "armo"));
    assert!(!type_is_of_type(data, "circ", "weap"));
    assert!(!type_is_of_type(data, "cyc1", "helm"), "cycles end without a match");

    let crs = data.item("crs").expect("crystal sword");
    assert!(item_type_is_of_type(data, crs, "weap"));

    let weapons: Vec<&str> = items_matching_types(data, &["weap"], &[])
        .into_iter()
        .map(|i| i.code.as_str())
        .collect();
    assert_eq!(weapons, vec!["crs", "7cr"]);
    let helms: Vec<&str> = items_matching_types(data, &["helm"], &["circ"])
        .into_iter()
        .map(|i| i.code.as_str())
        .collect();
    assert_eq!(helms, vec!["uap"]);
}

#[test]
fn other_language() {
    let tables = StringTables::load_dir(Path::new(STRINGS_DIR)).expect("load strings");
    let strings = Localizer::with_language(tables, "deDE");
    let data = Dataset::load_dir(Path::new(EXCEL_DIR)).expect("load excel dir");
    let config = RenderConfig::default();
    let ctx = Context::new(&data, &strings, &config);
    assert_eq!(ctx.item_name("crs").as_deref(), Some("Kristallschwert"));
    assert_eq!(
        ctx.describe(&[PropertyReference::new("hp", "", 3.0, 3.0)]),
        vec!["+3 zum Leben"]
    );
}
