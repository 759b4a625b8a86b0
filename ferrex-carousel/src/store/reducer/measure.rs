use std::sync::Arc;

use crate::actions::{MeasureAction, MeasureSnapshot};
use crate::store::state::{CarouselState, MeasureState};

pub(super) fn reduce(
    state: &CarouselState,
    action: &MeasureAction,
) -> Option<CarouselState> {
    match action {
        MeasureAction::Flush(snapshot) => flush(state, snapshot),
    }
}

fn flush(state: &CarouselState, snapshot: &MeasureSnapshot) -> Option<CarouselState> {
    let measure = MeasureState {
        viewport_main: snapshot.viewport_main.map(|v| v.max(0.0)),
        gap: snapshot.gap.max(0.0),
        slide_size_by_index: snapshot
            .slide_sizes
            .iter()
            .map(|&(index, size)| (index, size.max(0.0)))
            .collect(),
    };
    if *state.measure == measure {
        return None;
    }
    Some(CarouselState {
        measure: Arc::new(measure),
        ..state.clone()
    })
}
