//! Property tests for the track list.

use proptest::prelude::*;
use wl_tracks::{TrackEdit, TrackList, TrackSpec};

#[derive(Debug, Clone)]
enum Op {
    Add,
    Remove(usize),
    AddCurve(usize),
    RemoveCurve(usize, usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Add),
        (0usize..8).prop_map(Op::Remove),
        (0usize..8).prop_map(Op::AddCurve),
        (0usize..8, 0usize..4).prop_map(|(t, s)| Op::RemoveCurve(t, s)),
    ]
}

fn run(ops: &[Op]) -> TrackList {
    let mut list = TrackList::new();
    for op in ops {
        let ids = list.ids();
        let pick = |i: usize| (!ids.is_empty()).then(|| ids[i % ids.len()]);
        // Edits aimed at tracks that do not exist are expected to fail; ignore them.
        let _ = match *op {
            Op::Add => list.apply(TrackEdit::AddTrack),
            Op::Remove(i) => match pick(i) {
                Some(id) => list.apply(TrackEdit::RemoveTrack(id)),
                None => continue,
            },
            Op::AddCurve(i) => match pick(i) {
                Some(id) => list.apply(TrackEdit::AddCurve {
                    track: id,
                    curve_name: Some("GR".to_string()),
                }),
                None => continue,
            },
            Op::RemoveCurve(i, slot) => match pick(i) {
                Some(id) => list.apply(TrackEdit::RemoveCurve { track: id, slot }),
                None => continue,
            },
        };
    }
    list
}

proptest! {
    #[test]
    fn indices_stay_contiguous(ops in prop::collection::vec(op(), 0..40)) {
        let list = run(&ops);
        let indices: Vec<usize> = list.iter().map(TrackSpec::index).collect();
        let expected: Vec<usize> = (1..=list.len()).collect();
        prop_assert_eq!(indices, expected);
    }

    #[test]
    fn remove_then_add_lands_at_count(ops in prop::collection::vec(op(), 1..40)) {
        let mut list = run(&ops);
        if let Some(&first) = list.ids().first() {
            list.remove_track(first).unwrap();
        }
        let index = list.add_track().unwrap().index();
        prop_assert_eq!(index, list.len());
    }

    #[test]
    fn non_empty_tracks_have_exactly_one_primary(ops in prop::collection::vec(op(), 0..40)) {
        let list = run(&ops);
        for track in list.iter() {
            let primaries = track.curves.iter().filter(|c| c.is_primary).count();
            if track.curves.is_empty() {
                prop_assert_eq!(primaries, 0);
            } else {
                prop_assert_eq!(primaries, 1);
            }
        }
    }
}
