//! Tests for the mansion tree: room construction, topology, walking, map rendering

use rstest::{fixture, rstest};

use enigma::domain::layout::{ENTRANCE, KITCHEN, LIBRARY, LIVING_ROOM, OFFICE};
use enigma::domain::{
    enigma_mansion, DomainError, Mansion, MansionBuilder, Room, Side, TreeConvert,
};
use enigma::util::testing;

#[fixture]
fn mansion() -> Mansion {
    testing::init_test_setup();
    enigma_mansion().expect("fixed map builds")
}

// ============================================================
// Room construction
// ============================================================

#[test]
fn given_clue_when_constructing_room_then_room_is_leaf_with_clue() {
    let room = Room::new("Sótão", Some("Uma chave enferrujada"));

    assert_eq!(room.name(), "Sótão");
    assert_eq!(room.clue(), Some("Uma chave enferrujada"));
    assert!(room.is_leaf());
    assert_eq!(room.child(Side::Left), None);
    assert_eq!(room.child(Side::Right), None);
}

#[rstest]
#[case(None)]
#[case(Some(""))]
fn given_missing_or_empty_clue_when_constructing_room_then_room_has_no_clue(
    #[case] clue: Option<&str>,
) {
    let room = Room::new("Porão", clue);
    assert_eq!(room.clue(), None);
}

#[test]
fn given_room_when_displayed_then_shows_name_and_clue() {
    assert_eq!(Room::new("A", Some("x")).to_string(), "A [x]");
    assert_eq!(Room::new("B", None).to_string(), "B");
}

// ============================================================
// Fixed topology
// ============================================================

#[rstest]
fn given_enigma_mansion_then_has_five_rooms_with_entrance_at_root(mansion: Mansion) {
    assert_eq!(mansion.len(), 5);
    let root = mansion.root().unwrap();
    assert_eq!(mansion.room(root).unwrap().name(), ENTRANCE);
    assert_eq!(mansion.entrance().unwrap(), root);
}

#[rstest]
#[case(vec![], Some(ENTRANCE))]
#[case(vec![Side::Left], Some(LIVING_ROOM))]
#[case(vec![Side::Right], Some(KITCHEN))]
#[case(vec![Side::Left, Side::Left], Some(LIBRARY))]
#[case(vec![Side::Left, Side::Right], Some(OFFICE))]
#[case(vec![Side::Right, Side::Left], None)]
#[case(vec![Side::Left, Side::Left, Side::Left], None)]
fn given_path_when_walking_then_reaches_expected_room(
    mansion: Mansion,
    #[case] path: Vec<Side>,
    #[case] expected: Option<&str>,
) {
    let reached = mansion
        .walk(&path)
        .map(|idx| mansion.room(idx).unwrap().name());
    assert_eq!(reached, expected);
}

#[rstest]
fn given_enigma_mansion_when_iterating_then_visits_rooms_in_preorder(mansion: Mansion) {
    let names: Vec<_> = mansion.iter().map(|(_, room)| room.name()).collect();
    assert_eq!(names, vec![ENTRANCE, LIVING_ROOM, LIBRARY, OFFICE, KITCHEN]);
}

#[rstest]
fn given_enigma_mansion_then_only_library_office_and_kitchen_are_leaves(mansion: Mansion) {
    let mut leaves: Vec<_> = mansion
        .iter()
        .filter(|(_, room)| room.is_leaf())
        .map(|(_, room)| room.name())
        .collect();
    leaves.sort();
    assert_eq!(leaves, vec![LIBRARY, KITCHEN, OFFICE]);
}

#[rstest]
fn given_enigma_mansion_when_finding_by_name_then_matches_walk(mansion: Mansion) {
    assert_eq!(mansion.find(OFFICE), mansion.walk(&[Side::Left, Side::Right]));
    assert_eq!(mansion.find("Jardim"), None);
}

#[rstest]
fn given_every_room_then_carries_a_clue(mansion: Mansion) {
    assert!(mansion.iter().all(|(_, room)| room.clue().is_some()));
}

// ============================================================
// Construction guards
// ============================================================

#[test]
fn given_empty_builder_when_built_then_has_no_entrance() {
    let mansion = MansionBuilder::new().build();
    assert!(mansion.is_empty());
    assert_eq!(mansion.entrance(), Err(DomainError::EmptyMansion));
    assert_eq!(mansion.walk(&[]), None);
}

#[test]
fn given_entrance_when_adding_second_entrance_then_fails() {
    let mut builder = MansionBuilder::new();
    builder.entrance(Room::new("Hall", None)).unwrap();

    let result = builder.entrance(Room::new("Outro", None));

    assert_eq!(result, Err(DomainError::RootAlreadySet("Hall".to_string())));
    assert_eq!(builder.build().len(), 1);
}

#[test]
fn given_occupied_door_when_adding_behind_it_then_fails_without_change() {
    let mut builder = MansionBuilder::new();
    let hall = builder.entrance(Room::new("Hall", None)).unwrap();
    let first = builder.room(hall, Side::Left, Room::new("Sala", None)).unwrap();

    let result = builder.room(hall, Side::Left, Room::new("Intrusa", None));

    assert_eq!(
        result,
        Err(DomainError::SlotOccupied {
            parent: "Hall".to_string(),
            side: Side::Left,
        })
    );
    let mansion = builder.build();
    assert_eq!(mansion.len(), 2);
    assert_eq!(mansion.child(hall, Side::Left), Some(first));
    assert_eq!(mansion.find("Intrusa"), None);
}

#[test]
fn given_builder_when_wiring_both_doors_then_built_mansion_matches() {
    let mut builder = MansionBuilder::new();
    let hall = builder.entrance(Room::new("Hall", Some("a"))).unwrap();
    let left = builder.room(hall, Side::Left, Room::new("Oeste", None)).unwrap();
    let right = builder.room(hall, Side::Right, Room::new("Leste", Some("b"))).unwrap();

    let mansion = builder.build();

    assert_eq!(mansion.root(), Some(hall));
    assert_eq!(mansion.walk(&[Side::Left]), Some(left));
    assert_eq!(mansion.walk(&[Side::Right]), Some(right));
    assert!(mansion.room(left).unwrap().is_leaf());
}

#[test]
fn given_slot_error_then_message_names_room_and_side() {
    let err = DomainError::SlotOccupied {
        parent: "Hall".to_string(),
        side: Side::Right,
    };
    assert_eq!(err.to_string(), "right door of Hall already leads somewhere");
}

#[test]
fn given_parent_from_other_mansion_when_adding_then_unknown_room() {
    let mut other = MansionBuilder::new();
    let other_root = other.entrance(Room::new("X", None)).unwrap();
    let foreign = other.room(other_root, Side::Left, Room::new("Y", None)).unwrap();

    let mut builder = MansionBuilder::new();
    builder.entrance(Room::new("Hall", None)).unwrap();
    let result = builder.room(foreign, Side::Left, Room::new("Z", None));

    assert!(matches!(result, Err(DomainError::UnknownRoom(_))));
    assert_eq!(builder.build().len(), 1);
}

// ============================================================
// Map rendering
// ============================================================

#[rstest]
fn given_enigma_mansion_when_rendered_then_lists_rooms_left_before_right(mansion: Mansion) {
    let rendered = mansion.to_tree_string().to_string();
    let lines: Vec<_> = rendered.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Hall de Entrada [Pegadas misteriosas no tapete]");
    assert!(lines[1].ends_with("Sala de Estar [Um retrato com olhos recortados]"));
    assert!(lines[2].ends_with("Biblioteca [Um livro aberto em uma página marcada]"));
    assert!(lines[3].ends_with("Escritório [Uma carta parcialmente queimada]"));
    assert!(lines[4].ends_with("Cozinha [Um copo quebrado no chão]"));
}

#[test]
fn given_empty_mansion_when_rendered_then_says_empty() {
    let rendered = MansionBuilder::new().build().to_tree_string().to_string();
    assert_eq!(rendered.trim(), "Empty mansion");
}
