use bevy::prelude::*;

use crate::{
    EditorEntity,
    hierarchy::HierarchyText,
    inspector::InspectorText,
    palette_panel::PalettePanelText,
    status_bar::{StatusBarLeft, StatusBarRight},
};

const PANEL_BG: Color = Color::srgba(0.12, 0.12, 0.12, 0.85);
const TEXT_COLOR: Color = Color::srgb(0.85, 0.85, 0.85);
const HELP: &str =
    "LMB select/drag  RMB spawn/drag  Tab kind  1-9 item  Del delete  Esc deselect  Ctrl+R reload palette";

pub fn editor_layout() -> impl Bundle {
    (
        EditorEntity,
        Node {
            width: percent(100),
            height: percent(100),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::SpaceBetween,
            ..Default::default()
        },
        children![side_panels(), status_bar()],
    )
}

fn side_panels() -> impl Bundle {
    (
        EditorEntity,
        Node {
            width: percent(100),
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::FlexStart,
            ..Default::default()
        },
        children![hierarchy_panel(), item_column()],
    )
}

/// Palette list on top, inspector below.
fn item_column() -> impl Bundle {
    (
        EditorEntity,
        Node {
            width: px(240),
            flex_direction: FlexDirection::Column,
            row_gap: px(6),
            ..Default::default()
        },
        children![
            panel((PalettePanelText, label(""))),
            panel((InspectorText, label("Nothing selected"))),
        ],
    )
}

fn panel(content: impl Bundle) -> impl Bundle {
    (
        EditorEntity,
        Node {
            padding: px(8).all(),
            ..Default::default()
        },
        BackgroundColor(PANEL_BG),
        children![content],
    )
}

fn hierarchy_panel() -> impl Bundle {
    (
        EditorEntity,
        Node {
            width: px(260),
            padding: px(8).all(),
            ..Default::default()
        },
        BackgroundColor(PANEL_BG),
        children![(HierarchyText, label(""))],
    )
}

fn status_bar() -> impl Bundle {
    (
        EditorEntity,
        Node {
            width: percent(100),
            padding: px(6).all(),
            flex_direction: FlexDirection::Column,
            row_gap: px(2),
            ..Default::default()
        },
        BackgroundColor(PANEL_BG),
        children![
            (
                Node {
                    justify_content: JustifyContent::SpaceBetween,
                    ..Default::default()
                },
                children![
                    (StatusBarLeft, label("No selection")),
                    (StatusBarRight, label("")),
                ],
            ),
            label(HELP),
        ],
    )
}

fn label(text: &str) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: 13.0,
            ..Default::default()
        },
        TextColor(TEXT_COLOR),
    )
}
