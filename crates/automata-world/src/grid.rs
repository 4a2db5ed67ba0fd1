//! 2D grids and species stacks.

use automata_core::{Boundary, Error, Position, Result};
use serde::{Deserialize, Serialize};

/// A dense row-major 2D grid of cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![T::default(); width * height],
        }
    }
}

impl<T: Copy> Grid<T> {
    /// Build a grid by evaluating `f` at every position, row by row
    pub fn from_fn<F>(width: usize, height: usize, f: F) -> Self
    where
        F: FnMut(Position) -> T,
    {
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Position::new(x as i32, y as i32)))
            .map(f)
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a grid from row-major cells
    pub fn from_vec(width: usize, height: usize, cells: Vec<T>) -> Result<Self> {
        if cells.len() != width * height {
            return Err(Error::Shape(format!(
                "expected {} cells for a {}x{} grid, got {}",
                width * height,
                width,
                height,
                cells.len()
            )));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from a list of equally long rows
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(Error::Shape("rows have differing lengths".to_string()));
        }
        Self::from_vec(width, height, rows.into_iter().flatten().collect())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Cell at column `x`, row `y`. Panics when out of range.
    pub fn get(&self, x: usize, y: usize) -> T {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let index = self.index(x, y);
        self.cells[index] = value;
    }

    /// Look up a possibly out-of-range position under a boundary policy.
    /// Returns `None` for positions outside a zero-filled grid.
    pub fn sample(&self, pos: Position, boundary: Boundary) -> Option<T> {
        let (width, height) = (self.width as i32, self.height as i32);
        let pos = match boundary {
            Boundary::Wrap => pos.wrap(width, height),
            Boundary::ZeroFill if pos.in_bounds(width, height) => pos,
            Boundary::ZeroFill => return None,
        };
        Some(self.cells[pos.y as usize * self.width + pos.x as usize])
    }

    /// Iterator over all cells with their positions
    pub fn iter(&self) -> impl Iterator<Item = (Position, T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (self.index_to_pos(i), cell))
    }

    /// Apply `f` to every cell
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: Fn(T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(|&cell| f(cell)).collect(),
        }
    }

    /// Rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    pub fn same_shape<U>(&self, other: &Grid<U>) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Get position from index
    pub fn index_to_pos(&self, index: usize) -> Position {
        let x = (index % self.width) as i32;
        let y = (index / self.width) as i32;
        Position::new(x, y)
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }
}

/// Ordered per-species live/dead layers for multi-species Life.
/// Layer `i` holds species `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesStack {
    layers: Vec<Grid<bool>>,
}

impl SpeciesStack {
    /// An empty stack of `species` dead layers
    pub fn new(species: usize, width: usize, height: usize) -> Self {
        Self {
            layers: vec![Grid::new(width, height); species],
        }
    }

    pub fn from_layers(layers: Vec<Grid<bool>>) -> Result<Self> {
        let Some(first) = layers.first() else {
            return Err(Error::Shape("species stack needs at least one layer".to_string()));
        };
        if layers.iter().any(|layer| !layer.same_shape(first)) {
            return Err(Error::Shape("species layers have differing shapes".to_string()));
        }
        Ok(Self { layers })
    }

    /// Split a merged frame (0 empty, k owned by species k) into layers
    pub fn from_frame(frame: &Grid<u8>, species: usize) -> Result<Self> {
        if let Some((pos, value)) = frame.iter().find(|&(_, v)| v as usize > species) {
            return Err(Error::InvariantViolation(format!(
                "cell {} holds species {} but only {} species exist",
                pos, value, species
            )));
        }
        let layers = (1..=species)
            .map(|k| frame.map(|v| v as usize == k))
            .collect();
        Ok(Self { layers })
    }

    pub fn species(&self) -> usize {
        self.layers.len()
    }

    /// Width of the layers, 0 for a stack without layers
    pub fn width(&self) -> usize {
        self.layers.first().map_or(0, Grid::width)
    }

    pub fn height(&self) -> usize {
        self.layers.first().map_or(0, Grid::height)
    }

    pub fn layers(&self) -> &[Grid<bool>] {
        &self.layers
    }

    /// Layer of 1-indexed species `k`
    pub fn layer(&self, k: usize) -> &Grid<bool> {
        &self.layers[k - 1]
    }

    pub fn layer_mut(&mut self, k: usize) -> &mut Grid<bool> {
        &mut self.layers[k - 1]
    }

    pub fn layers_mut(&mut self) -> &mut [Grid<bool>] {
        &mut self.layers
    }

    /// Replace every layer by `f(layer)`. `f` must keep the layer shape.
    pub fn map_layers<F>(&self, f: F) -> Self
    where
        F: Fn(&Grid<bool>) -> Grid<bool>,
    {
        let layers: Vec<_> = self.layers.iter().map(f).collect();
        debug_assert!(layers.iter().all(|layer| layer.same_shape(&self.layers[0])));
        Self { layers }
    }

    /// Species alive at a cell, in ascending index order
    pub fn occupants(&self, x: usize, y: usize) -> impl Iterator<Item = usize> + '_ {
        self.layers
            .iter()
            .enumerate()
            .filter(move |(_, layer)| layer.get(x, y))
            .map(|(i, _)| i + 1)
    }

    /// Merge into one renderable grid: per-cell maximum species index alive
    pub fn merge(&self) -> Grid<u8> {
        let mut frame: Grid<u8> = Grid::new(self.width(), self.height());
        for (i, layer) in self.layers.iter().enumerate() {
            let k = (i + 1) as u8;
            for (cell, &alive) in frame.cells.iter_mut().zip(layer.cells()) {
                if alive {
                    *cell = (*cell).max(k);
                }
            }
        }
        frame
    }
}
