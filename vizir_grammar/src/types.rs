// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field types, channels and mark types.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The measurement type of an encoded field.
///
/// Serialized with the grammar's one-letter codes (`"Q"`, `"O"`, `"N"`, `"T"`); the
/// long names are accepted on input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldType {
    /// Continuous numbers.
    #[serde(rename = "Q", alias = "quantitative")]
    Quantitative,
    /// Ordered categories.
    #[serde(rename = "O", alias = "ordinal")]
    Ordinal,
    /// Unordered categories.
    #[serde(rename = "N", alias = "nominal")]
    Nominal,
    /// Dates and times.
    #[serde(rename = "T", alias = "temporal")]
    Temporal,
}

impl FieldType {
    /// Every field type, in code order.
    pub const ALL: [Self; 4] = [
        Self::Quantitative,
        Self::Ordinal,
        Self::Nominal,
        Self::Temporal,
    ];

    /// The one-letter code used in specs.
    pub fn code(self) -> &'static str {
        match self {
            Self::Quantitative => "Q",
            Self::Ordinal => "O",
            Self::Nominal => "N",
            Self::Temporal => "T",
        }
    }

    /// Returns `true` if `self` is any of `types`; order does not matter.
    pub fn is_any_of(self, types: &[Self]) -> bool {
        types.contains(&self)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A visual role a field can be mapped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Horizontal position.
    X,
    /// Vertical position.
    Y,
    /// Vertical facet.
    Row,
    /// Horizontal facet.
    #[serde(alias = "col")]
    Column,
    /// Fill/stroke color.
    Color,
    /// Mark size.
    Size,
    /// Point shape.
    Shape,
    /// Text content.
    Text,
    /// Grouping without a visual mapping.
    Detail,
}

impl Channel {
    /// Every channel, in spec order.
    pub const ALL: [Self; 9] = [
        Self::X,
        Self::Y,
        Self::Row,
        Self::Column,
        Self::Color,
        Self::Size,
        Self::Shape,
        Self::Text,
        Self::Detail,
    ];

    /// The key used for this channel in a spec's `encodings` mapping.
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Row => "row",
            Self::Column => "column",
            Self::Color => "color",
            Self::Size => "size",
            Self::Shape => "shape",
            Self::Text => "text",
            Self::Detail => "detail",
        }
    }

    /// Looks up a channel by its spec key (`"col"` is accepted for [`Channel::Column`]).
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "col" {
            return Some(Self::Column);
        }
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Field types this channel can encode.
    pub fn supported_types(self) -> &'static [FieldType] {
        use FieldType::{Nominal, Ordinal, Quantitative, Temporal};
        match self {
            Self::X | Self::Y | Self::Color | Self::Text => {
                &[Quantitative, Ordinal, Nominal, Temporal]
            }
            Self::Row | Self::Column | Self::Detail => &[Ordinal, Nominal, Temporal],
            Self::Size => &[Quantitative, Ordinal, Temporal],
            Self::Shape => &[Ordinal, Nominal],
        }
    }

    /// Returns `true` for the categorical layout channels (`row`, `column`).
    pub fn is_facet(self) -> bool {
        matches!(self, Self::Row | Self::Column)
    }

    /// Returns `true` for channels rendered with an axis.
    pub fn has_axis(self) -> bool {
        matches!(self, Self::X | Self::Y | Self::Row | Self::Column)
    }

    /// Returns `true` for channels whose scale can be quantitative.
    pub fn has_quantitative_scale(self) -> bool {
        self.supported_types().contains(&FieldType::Quantitative)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The graphical mark a spec draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    /// Point marks.
    Point,
    /// Tick marks.
    Tick,
    /// Bars.
    Bar,
    /// Lines.
    Line,
    /// Filled areas.
    Area,
    /// Filled circles.
    Circle,
    /// Filled squares.
    Square,
    /// Text labels.
    Text,
}

impl MarkType {
    /// Every mark type.
    pub const ALL: [Self; 8] = [
        Self::Point,
        Self::Tick,
        Self::Bar,
        Self::Line,
        Self::Area,
        Self::Circle,
        Self::Square,
        Self::Text,
    ];

    /// The spec value for this mark type.
    pub fn name(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Tick => "tick",
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Area => "area",
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Text => "text",
        }
    }
}
