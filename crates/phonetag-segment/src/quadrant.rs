use std::fmt;
use std::ops::Range;

/// One quarter of a square image, split at `size / 2` on both axes.
///
/// For odd sizes the far half (`[size / 2, size)`) is one element longer, so
/// the right and bottom quadrants own the middle column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    pub fn x_range(self, size: usize) -> Range<usize> {
        match self {
            Quadrant::TopLeft | Quadrant::BottomLeft => 0..size / 2,
            Quadrant::TopRight | Quadrant::BottomRight => size / 2..size,
        }
    }

    pub fn y_range(self, size: usize) -> Range<usize> {
        match self {
            Quadrant::TopLeft | Quadrant::TopRight => 0..size / 2,
            Quadrant::BottomLeft | Quadrant::BottomRight => size / 2..size,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Quadrant::TopLeft => "top-left",
            Quadrant::TopRight => "top-right",
            Quadrant::BottomLeft => "bottom-left",
            Quadrant::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exclusive view of one quadrant of a row-major `size * size` buffer.
///
/// Holds one `&mut` slice per row of the quadrant; views produced by
/// [`split_quadrants`] never alias.
#[derive(Debug)]
pub struct QuadrantMut<'a, T> {
    quadrant: Quadrant,
    size: usize,
    rows: Vec<&'a mut [T]>,
}

impl<'a, T> QuadrantMut<'a, T> {
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    pub fn x_range(&self) -> Range<usize> {
        self.quadrant.x_range(self.size)
    }

    pub fn y_range(&self) -> Range<usize> {
        self.quadrant.y_range(self.size)
    }

    pub fn pixel_count(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }

    /// Rows paired with their absolute `y` coordinate.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = (usize, &mut [T])> + '_ {
        let y0 = self.y_range().start;
        self.rows
            .iter_mut()
            .enumerate()
            .map(move |(i, row)| (y0 + i, &mut **row))
    }
}

/// Splits a row-major `size * size` buffer into its four quadrants, in
/// [`Quadrant::ALL`] order.
///
/// # Panics
///
/// Panics if `buffer.len() != size * size`.
pub fn split_quadrants<T>(buffer: &mut [T], size: usize) -> [QuadrantMut<'_, T>; 4] {
    assert_eq!(
        buffer.len(),
        size * size,
        "quadrant split needs a {size}x{size} buffer"
    );

    let half = size / 2;
    let near = half;
    let far = size - half;
    let mut top_left = Vec::with_capacity(near);
    let mut top_right = Vec::with_capacity(near);
    let mut bottom_left = Vec::with_capacity(far);
    let mut bottom_right = Vec::with_capacity(far);

    if size > 0 {
        for (y, row) in buffer.chunks_exact_mut(size).enumerate() {
            let (left, right) = row.split_at_mut(half);
            if y < half {
                top_left.push(left);
                top_right.push(right);
            } else {
                bottom_left.push(left);
                bottom_right.push(right);
            }
        }
    }

    let view = |quadrant, rows| QuadrantMut {
        quadrant,
        size,
        rows,
    };
    [
        view(Quadrant::TopLeft, top_left),
        view(Quadrant::TopRight, top_right),
        view(Quadrant::BottomLeft, bottom_left),
        view(Quadrant::BottomRight, bottom_right),
    ]
}
