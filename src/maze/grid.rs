use super::cell::GridCell;

/// Flat row-major storage of cells and the wall slots between them.
#[derive(Debug)]
pub struct Grid {
    data: Box<[GridCell]>,
    width: u32,
    height: u32,
}

impl Grid {
    pub fn new(width: u32, height: u32, cell: GridCell) -> Self {
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn data(&self) -> &[GridCell] {
        &self.data
    }

    fn ravel_index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height, "grid index out of range");
        y as usize * self.width as usize + x as usize
    }

    /// Sets the slot at `(x, y)`, returning true if its value changed.
    pub fn set(&mut self, coord: (u32, u32), cell: GridCell) -> bool {
        let idx = self.ravel_index(coord.0, coord.1);
        let old = std::mem::replace(&mut self.data[idx], cell);
        old != cell
    }
}

impl std::ops::Index<(u32, u32)> for Grid {
    type Output = GridCell;

    fn index(&self, index: (u32, u32)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}
