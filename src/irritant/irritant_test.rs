use super::{BITS_PER_GROUP, GROUP_MAX, GROUP_SHIFT, Irritant, IrritantSet};

#[test]
fn irritant_packs_group_and_bit() {
    let irritant = Irritant::new(2, 4);
    assert_eq!(irritant.raw(), (2 << GROUP_SHIFT) | (1 << 4));
    assert_eq!(irritant.group(), 2);
    assert_eq!(irritant.bit(), 4);
    assert_eq!(irritant.mask(), 1 << 4);
    assert_eq!(irritant.to_string(), "2:5");
}

#[test]
fn grid_covers_every_cell_once() {
    let cells: Vec<Irritant> = Irritant::grid().collect();
    assert_eq!(cells.len(), (GROUP_MAX * BITS_PER_GROUP) as usize);
    let set: IrritantSet = cells.iter().copied().collect();
    assert_eq!(set.len(), cells.len());
}

#[test]
fn same_bit_in_different_groups_is_distinct() {
    let set = IrritantSet::of(&[Irritant::new(0, 3)]);
    assert!(set.contains(Irritant::new(0, 3)));
    assert!(!set.contains(Irritant::new(1, 3)));
}

#[test]
fn set_operations() {
    let a = IrritantSet::of(&[Irritant::new(0, 1), Irritant::new(3, 2)]);
    let b = IrritantSet::of(&[Irritant::new(3, 2), Irritant::new(1, 0)]);

    let union = a.union(&b);
    assert_eq!(union.len(), 3);
    assert!(union.is_superset(&a));
    assert!(union.is_superset(&b));
    assert!(!a.is_superset(&b));

    let diff = union.difference(&b);
    assert_eq!(diff.iter().collect::<Vec<_>>(), vec![Irritant::new(0, 1)]);

    let mut c = a;
    c.remove(Irritant::new(0, 1));
    assert_eq!(c.single(), Some(Irritant::new(3, 2)));
    assert_eq!(a.single(), None);
    assert!(IrritantSet::EMPTY.is_empty());
}

#[test]
fn iteration_is_ordered_by_group_then_bit() {
    let set = IrritantSet::of(&[Irritant::new(2, 0), Irritant::new(0, 7), Irritant::new(0, 2)]);
    let order: Vec<String> = set.iter().map(|irritant| irritant.to_string()).collect();
    assert_eq!(order, vec!["0:3", "0:8", "2:1"]);
    assert_eq!(set.to_string(), "{0:3, 0:8, 2:1}");
}

#[test]
fn declared_irritants_are_unique() {
    let set = IrritantSet::of(Irritant::DECLARED);
    assert_eq!(set.len(), Irritant::DECLARED.len());
}

#[test]
fn from_raw_rejects_cells_outside_the_grid() {
    let irritant = Irritant::new(3, 28);
    assert_eq!(Irritant::from_raw(irritant.raw()), Some(irritant));
    assert_eq!(Irritant::from_raw(0x8000_0001), None);
    assert_eq!(Irritant::from_raw(GROUP_MAX << GROUP_SHIFT | 1), None);
    assert_eq!(Irritant::from_raw(0), None);
    assert_eq!(Irritant::from_raw((1 << GROUP_SHIFT) | 0b11), None);
    for irritant in Irritant::grid() {
        assert_eq!(Irritant::from_raw(irritant.raw()), Some(irritant));
        assert!(!IrritantSet::EMPTY.contains(irritant));
    }
}
