//! Moore-neighborhood counting and the B3/S23 transition rule
//!
//! The grid has hard edges: positions outside `[0, size)` on either axis do
//! not exist, so border cells simply have fewer neighbors.

use bitvec::slice::BitSlice;
use ndarray::Array2;

/// Offsets of the eight cells surrounding a position
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Live neighbor count at which a dead cell comes alive
pub const BIRTH_COUNT: u8 = 3;
/// Fewest live neighbors a live cell survives with
pub const SURVIVAL_MIN: u8 = 2;
/// Most live neighbors a live cell survives with
pub const SURVIVAL_MAX: u8 = 3;

/// Next state of one cell given its current state and live neighbor count
pub const fn next_state(alive: bool, live_neighbors: u8) -> bool {
    if alive {
        live_neighbors >= SURVIVAL_MIN && live_neighbors <= SURVIVAL_MAX
    } else {
        live_neighbors == BIRTH_COUNT
    }
}

/// Neighbor position for an offset, or `None` when it falls off the grid
pub fn offset_position(
    size: usize,
    row: usize,
    col: usize,
    (d_row, d_col): (isize, isize),
) -> Option<(usize, usize)> {
    let neighbor_row = row.checked_add_signed(d_row)?;
    let neighbor_col = col.checked_add_signed(d_col)?;
    (neighbor_row < size && neighbor_col < size).then_some((neighbor_row, neighbor_col))
}

/// Count live neighbors of a single cell in a row-major `size × size` grid
pub fn count_live_neighbors(cells: &BitSlice, size: usize, row: usize, col: usize) -> u8 {
    MOORE_OFFSETS
        .iter()
        .filter_map(|&offset| offset_position(size, row, col, offset))
        .filter(|&(r, c)| cells.get(r * size + c).as_deref() == Some(&true))
        .count() as u8
}

/// Count live neighbors for every cell of a generation
///
/// Walks live cells only and scatters their contribution onto the
/// surrounding positions, so the cost is one pass to zero the counts plus
/// eight updates per live cell. The returned array is independent of
/// `cells` and serves as the read-only snapshot the next generation is
/// derived from.
pub fn neighbor_counts(cells: &BitSlice, size: usize) -> Array2<u8> {
    let mut counts = Array2::zeros((size, size));

    for index in cells.iter_ones() {
        let (row, col) = (index / size, index % size);
        for &offset in &MOORE_OFFSETS {
            if let Some((r, c)) = offset_position(size, row, col, offset) {
                if let Some(count) = counts.get_mut([r, c]) {
                    *count += 1;
                }
            }
        }
    }

    counts
}

/// Write the generation following `current` into `next`
///
/// `current` is only read, so no cell can observe another cell's updated
/// value within the same generation.
pub fn apply_rule(current: &BitSlice, counts: &Array2<u8>, next: &mut BitSlice) {
    for ((alive, &count), mut slot) in current
        .iter()
        .by_vals()
        .zip(counts.iter())
        .zip(next.iter_mut())
    {
        *slot = next_state(alive, count);
    }
}
