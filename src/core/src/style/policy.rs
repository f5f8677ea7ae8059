use crate::error::MapResult;
use crate::style::{ColorRange, Rgb};
use crate::transfers::FeeKind;
use serde::Serialize;

pub const BODY_COLORS: ColorRange =
    ColorRange::new(Rgb::new(0x00, 0x00, 0x00), Rgb::new(0xd9, 0xd9, 0xd9));
pub const LOAN_HEAD_COLORS: ColorRange =
    ColorRange::new(Rgb::new(0x00, 0x6d, 0x2c), Rgb::new(0xc7, 0xe9, 0xc0));
pub const LOAN_END_HEAD_COLORS: ColorRange =
    ColorRange::new(Rgb::new(0xa6, 0x36, 0x03), Rgb::new(0xfe, 0xe6, 0xce));

pub const HEAD_MAX_PIXEL_SIZE: f64 = 15.0;
pub const HEAD_MIN_PIXEL_SIZE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArrowStyle {
    pub body_color: Rgb,
    pub head_color: Rgb,
    pub head_pixel_size: f64,
    pub fee_kind: FeeKind,
}

/// Colours and arrowhead sizes for the entries of a transfer list.
///
/// `fixed` is true for the Left/Joined views, where every range collapses
/// to its start colour and heads keep full size.
#[derive(Debug, Clone, Copy)]
pub struct StylePolicy {
    pub fixed: bool,
}

impl StylePolicy {
    pub fn new(fixed: bool) -> Self {
        StylePolicy { fixed }
    }

    fn pick(&self, range: ColorRange, index: usize, total: usize) -> Rgb {
        if self.fixed {
            range.start
        } else {
            range.at(index, total)
        }
    }

    pub fn body_color(&self, index: usize, total: usize) -> Rgb {
        self.pick(BODY_COLORS, index, total)
    }

    pub fn head_color(&self, kind: FeeKind, index: usize, total: usize) -> Rgb {
        match kind {
            FeeKind::LoanStart => self.pick(LOAN_HEAD_COLORS, index, total),
            FeeKind::LoanEnd => self.pick(LOAN_END_HEAD_COLORS, index, total),
            FeeKind::Other => self.body_color(index, total),
        }
    }

    /// Shrinks from 15px towards 5px along the list
    pub fn head_pixel_size(&self, index: usize, total: usize) -> f64 {
        if self.fixed || total == 0 {
            return HEAD_MAX_PIXEL_SIZE;
        }

        HEAD_MAX_PIXEL_SIZE
            - (HEAD_MAX_PIXEL_SIZE - HEAD_MIN_PIXEL_SIZE) * index as f64 / total as f64
    }

    pub fn arrow_style(&self, fee: Option<&str>, index: usize, total: usize) -> MapResult<ArrowStyle> {
        let fee_kind = FeeKind::classify(fee)?;

        Ok(ArrowStyle {
            body_color: self.body_color(index, total),
            head_color: self.head_color(fee_kind, index, total),
            head_pixel_size: self.head_pixel_size(index, total),
            fee_kind,
        })
    }
}
