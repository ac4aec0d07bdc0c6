use crate::nav::{CardNumbering, NavigationState};

pub const VISIBLE_DEPTH: usize = 5;
pub const DEPTH_STEP_PX: f64 = 30.0;
pub const LIFT_STEP_PX: f64 = 8.0;
pub const SCALE_STEP: f64 = 0.05;
pub const DRAG_ROTATION_RATIO: f64 = 0.1;
pub const TOP_Z_INDEX: i32 = 10;
pub const HIDDEN_Z_INDEX: i32 = -1;
pub const HIDDEN_TRANSFORM: &str = "translateZ(-1000px)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub translate_z: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl StackTransform {
    pub fn for_offset(offset: usize, drag_dx: f64) -> Self {
        let depth = offset as f64;
        Self {
            translate_x: drag_dx,
            translate_y: depth * LIFT_STEP_PX,
            translate_z: 0.0 - depth * DEPTH_STEP_PX,
            rotate_y: drag_dx * DRAG_ROTATION_RATIO,
            scale: 1.0 - depth * SCALE_STEP,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "translateX({}px) translateY({}px) translateZ({}px) rotateY({}deg) scale({})",
            self.translate_x, self.translate_y, self.translate_z, self.rotate_y, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardPlacement {
    Visible {
        offset: usize,
        transform: StackTransform,
        z_index: i32,
    },
    Hidden,
}

impl CardPlacement {
    pub fn is_visible(&self) -> bool {
        matches!(self, CardPlacement::Visible { .. })
    }

    pub fn is_active(&self) -> bool {
        matches!(self, CardPlacement::Visible { offset: 0, .. })
    }

    pub fn transform_css(&self) -> String {
        match self {
            CardPlacement::Visible { transform, .. } => transform.css(),
            CardPlacement::Hidden => HIDDEN_TRANSFORM.to_string(),
        }
    }

    pub fn z_index(&self) -> i32 {
        match self {
            CardPlacement::Visible { z_index, .. } => *z_index,
            CardPlacement::Hidden => HIDDEN_Z_INDEX,
        }
    }

    pub fn class_list(&self) -> &'static str {
        match self {
            CardPlacement::Visible { offset: 0, .. } => "card visible active",
            CardPlacement::Visible { .. } => "card visible",
            CardPlacement::Hidden => "card",
        }
    }

    pub fn style(&self) -> String {
        format!("transform: {}; z-index: {};", self.transform_css(), self.z_index())
    }
}

/// Places entry `entry_index` relative to the card on top. `drag_dx` only
/// moves the active card; cards below it ignore the drag.
pub fn place_card(entry_index: usize, current_index: usize, drag_dx: f64) -> CardPlacement {
    let Some(offset) = entry_index.checked_sub(current_index) else {
        return CardPlacement::Hidden;
    };
    if offset >= VISIBLE_DEPTH {
        return CardPlacement::Hidden;
    }
    let dx = if offset == 0 { drag_dx } else { 0.0 };
    CardPlacement::Visible {
        offset,
        transform: StackTransform::for_offset(offset, dx),
        z_index: TOP_Z_INDEX - offset as i32,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArrowState {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl ArrowState {
    pub fn from_state(state: &NavigationState) -> Self {
        Self {
            prev_disabled: state.at_start(),
            next_disabled: state.at_end(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StackLayout {
    pub placements: Vec<CardPlacement>,
    pub arrows: ArrowState,
    pub current_label: usize,
    pub total: usize,
}

impl StackLayout {
    pub fn project(state: &NavigationState, numbering: CardNumbering, drag_dx: f64) -> Self {
        let current = state.current_index();
        let placements = (0..state.deck_size())
            .map(|index| place_card(index, current, drag_dx))
            .collect();
        Self {
            placements,
            arrows: ArrowState::from_state(state),
            current_label: numbering.display_number(current),
            total: state.deck_size(),
        }
    }
}
