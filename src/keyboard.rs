//! Keyboard layout matching by key-code.
//!
//! Both entry points run the same scan (layout order, then layer order,
//! then mapping order), so the bounded variant's output is always a
//! prefix of the unbounded variant's. All matches for a key-code are
//! emitted: layouts may map one code several times in a layer to model
//! dead keys and alternate sequences.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::dataset::{self, KeyMapping, KeyboardLayer, KeyboardLayout};

/// One mapping that produced the searched key-code. Every reference is
/// borrowed from the dataset; results own nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMatch<'a> {
    pub layout: &'a KeyboardLayout,
    pub layer: &'a KeyboardLayer,
    pub mapping: &'a KeyMapping,
}

/// Failure of the growable match collection.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("could not grow match collection: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Receives matches in discovery order. `push` returns whether the scan
/// should continue.
trait MatchSink<'a> {
    fn push(&mut self, entry: LayoutMatch<'a>) -> Result<bool, MatchError>;
}

struct GrowableSink<'a> {
    matches: Vec<LayoutMatch<'a>>,
}

impl<'a> MatchSink<'a> for GrowableSink<'a> {
    fn push(&mut self, entry: LayoutMatch<'a>) -> Result<bool, MatchError> {
        self.matches.try_reserve(1)?;
        self.matches.push(entry);
        Ok(true)
    }
}

struct FixedSink<'buf, 'a> {
    slots: &'buf mut [Option<LayoutMatch<'a>>],
    written: usize,
}

impl<'a> MatchSink<'a> for FixedSink<'_, 'a> {
    fn push(&mut self, entry: LayoutMatch<'a>) -> Result<bool, MatchError> {
        if self.written >= self.slots.len() {
            return Ok(false);
        }
        self.slots[self.written] = Some(entry);
        self.written += 1;
        Ok(self.written < self.slots.len())
    }
}

fn scan_layouts<'a, S: MatchSink<'a>>(
    layouts: &'a [KeyboardLayout],
    keycode: u16,
    layer_name: &str,
    sink: &mut S,
) -> Result<(), MatchError> {
    for layout in layouts {
        for layer in layout.layers {
            if layer.name != layer_name {
                continue;
            }
            for mapping in layer.mappings {
                if mapping.keycode != keycode {
                    continue;
                }
                if !sink.push(LayoutMatch { layout, layer, mapping })? {
                    return Ok(());
                }
            }
        }
    }
    Ok(())
}

/// All (layout, layer, mapping) matches for `keycode` within layers named
/// `layer_name`, in a caller-owned growable collection.
pub fn find_by_keycode(
    keycode: u16,
    layer_name: &str,
) -> Result<Vec<LayoutMatch<'static>>, MatchError> {
    let mut sink = GrowableSink { matches: Vec::new() };
    scan_layouts(dataset::keyboard_layouts(), keycode, layer_name, &mut sink)?;
    Ok(sink.matches)
}

/// Bounded variant of [`find_by_keycode`]: fills `buffer` in discovery
/// order, stops scanning once it is full, and returns the count written.
/// A full buffer (count == capacity) may mean truncation.
///
/// Performs no heap allocation, so it is safe to call where an allocator
/// is unavailable or forbidden.
pub fn find_by_keycode_into(
    keycode: u16,
    layer_name: &str,
    buffer: &mut [Option<LayoutMatch<'static>>],
) -> usize {
    let mut sink = FixedSink { slots: buffer, written: 0 };
    // A fixed sink never allocates, so the scan cannot fail.
    let scanned = scan_layouts(dataset::keyboard_layouts(), keycode, layer_name, &mut sink);
    debug_assert!(scanned.is_ok());
    sink.written
}
