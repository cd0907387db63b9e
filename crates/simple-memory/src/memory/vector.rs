//! Accessors over runs of consecutive cells.
//!
//! Reads come in two flavours:
//!
//! - `read_*_view` borrows the backing buffer. No copy is made and the slice
//!   is valid for as long as the memory is borrowed.
//! - `read_*_copy` returns an owned `Vec` that is independent of later writes.
//!
//! Integer views reinterpret cells in place, which only yields the right
//! values when the host byte order matches the little-endian cell encoding.
//! On big-endian hosts they fail with [`MemoryError::ViewNotSupported`] and
//! callers should use the copying accessors instead.

use tracing::trace;

use super::SimpleMemory;
use super::scalar::pad_cell;
use crate::codec::CellValue;
use crate::error::{MemoryError, Result};
use crate::layout::CELL_SIZE_BYTES;

impl SimpleMemory {
    /// Write signed integers to consecutive cells starting at `start`
    pub fn write_int32_batch(&mut self, start: usize, values: &[i32]) -> Result<()> {
        self.write_run(start, values)
    }

    /// Write unsigned integers to consecutive cells starting at `start`
    pub fn write_uint32_batch(&mut self, start: usize, values: &[u32]) -> Result<()> {
        self.write_run(start, values)
    }

    /// Write booleans to consecutive cells starting at `start`
    pub fn write_boolean_batch(&mut self, start: usize, values: &[bool]) -> Result<()> {
        self.write_run(start, values)
    }

    /// Write one row of up to 4 raw bytes per cell, starting at `start`.
    ///
    /// Every row is checked before any cell is written.
    pub fn write_4bytes_batch<B: AsRef<[u8]>>(&mut self, start: usize, rows: &[B]) -> Result<()> {
        let cells = rows
            .iter()
            .map(|row| pad_cell(row.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.write_run(start, &cells)
    }

    /// Borrow `count` cells starting at `start` as signed integers
    pub fn read_int32_view(&self, start: usize, count: usize) -> Result<&[i32]> {
        Ok(bytemuck::cast_slice(self.read_uint32_view(start, count)?))
    }

    /// Borrow `count` cells starting at `start` as unsigned integers
    pub fn read_uint32_view(&self, start: usize, count: usize) -> Result<&[u32]> {
        let range = self.cell_range(start, count)?;
        if cfg!(target_endian = "big") {
            return Err(MemoryError::ViewNotSupported {
                reason: "host byte order differs from little-endian cell encoding",
            });
        }
        Ok(&self.cells[range])
    }

    /// Borrow `count` cells starting at `start` as raw cell bytes
    pub fn read_4bytes_view(&self, start: usize, count: usize) -> Result<&[[u8; 4]]> {
        let range = self.cell_range(start, count)?;
        Ok(bytemuck::cast_slice(&self.cells[range]))
    }

    /// Copy `count` cells starting at `start` as signed integers
    pub fn read_int32_copy(&self, start: usize, count: usize) -> Result<Vec<i32>> {
        self.read_run(start, count)
    }

    /// Copy `count` cells starting at `start` as unsigned integers
    pub fn read_uint32_copy(&self, start: usize, count: usize) -> Result<Vec<u32>> {
        self.read_run(start, count)
    }

    /// Copy `count` cells starting at `start` as booleans
    pub fn read_boolean_copy(&self, start: usize, count: usize) -> Result<Vec<bool>> {
        self.read_run(start, count)
    }

    /// Copy `count` cells starting at `start` as raw cell bytes
    pub fn read_4bytes_copy(&self, start: usize, count: usize) -> Result<Vec<[u8; 4]>> {
        self.read_run(start, count)
    }

    fn write_run<T: CellValue>(&mut self, start: usize, values: &[T]) -> Result<()> {
        let range = self.byte_range(start, values.len())?;
        trace!("Writing {} cells from index {}", values.len(), start);

        let bytes = &mut self.as_bytes_mut()[range];
        for (cell, value) in bytes.chunks_exact_mut(CELL_SIZE_BYTES).zip(values) {
            cell.copy_from_slice(&value.to_cell());
        }
        Ok(())
    }

    fn read_run<T: CellValue>(&self, start: usize, count: usize) -> Result<Vec<T>> {
        let range = self.byte_range(start, count)?;
        Ok(self.as_bytes()[range]
            .chunks_exact(CELL_SIZE_BYTES)
            .map(|chunk| T::from_cell([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_batch_matches_scalar_writes() {
        let mut batched = SimpleMemory::new(6);
        batched.write_int32_batch(2, &[7, -8, 9]).unwrap();

        let mut sequential = SimpleMemory::new(6);
        sequential.write_int32(2, 7).unwrap();
        sequential.write_int32(3, -8).unwrap();
        sequential.write_int32(4, 9).unwrap();

        assert_eq!(batched.as_bytes(), sequential.as_bytes());
    }

    #[test]
    fn test_view_and_copy_agree() {
        let mut memory = SimpleMemory::new(4);
        memory.write_int32_batch(0, &[1, -2, 3, i32::MIN]).unwrap();

        if cfg!(target_endian = "little") {
            assert_eq!(memory.read_int32_view(1, 3).unwrap(), &[-2, 3, i32::MIN]);
            assert_eq!(
                memory.read_uint32_view(0, 2).unwrap(),
                &[1, 0xFFFF_FFFE]
            );
        } else {
            assert!(matches!(
                memory.read_int32_view(1, 3),
                Err(MemoryError::ViewNotSupported { .. })
            ));
        }
        assert_eq!(memory.read_int32_copy(1, 3).unwrap(), vec![-2, 3, i32::MIN]);
        assert_eq!(memory.read_uint32_copy(0, 2).unwrap(), vec![1, 0xFFFF_FFFE]);
    }

    #[test]
    fn test_copy_survives_later_writes() {
        let mut memory = SimpleMemory::new(2);
        memory.write_uint32_batch(0, &[10, 20]).unwrap();

        let copy = memory.read_uint32_copy(0, 2).unwrap();
        memory.write_uint32_batch(0, &[30, 40]).unwrap();

        assert_eq!(copy, vec![10, 20]);
        assert_eq!(memory.read_uint32_copy(0, 2).unwrap(), vec![30, 40]);
    }

    #[test]
    fn test_boolean_batch() {
        let mut memory = SimpleMemory::new(3);
        memory.write_boolean_batch(0, &[true, false, true]).unwrap();
        assert_eq!(
            memory.read_4bytes_copy(0, 3).unwrap(),
            vec![[0xFF; 4], [0x00; 4], [0xFF; 4]]
        );
        assert_eq!(
            memory.read_boolean_copy(0, 3).unwrap(),
            vec![true, false, true]
        );
    }

    #[test]
    fn test_4bytes_matrix() {
        let mut memory = SimpleMemory::new(3);
        let rows: [&[u8]; 3] = [&[1, 2, 3, 4], &[5], &[]];
        memory.write_4bytes_batch(0, &rows).unwrap();

        assert_eq!(
            memory.read_4bytes_view(0, 3).unwrap(),
            &[[1, 2, 3, 4], [5, 0, 0, 0], [0, 0, 0, 0]]
        );
    }

    #[test]
    fn test_4bytes_view_available_on_any_host() {
        let mut memory = SimpleMemory::new(2);
        memory.write_uint32_batch(0, &[0x0403_0201, u32::MAX]).unwrap();

        let view = memory.read_4bytes_view(0, 2).unwrap();
        assert_eq!(view, &[[1, 2, 3, 4], [0xFF; 4]]);
        assert_eq!(view, memory.read_4bytes_copy(0, 2).unwrap().as_slice());
        assert!(memory.read_4bytes_view(0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_4bytes_matrix_rejects_before_writing() {
        let mut memory = SimpleMemory::new(3);
        let rows = vec![vec![1u8], vec![2, 2, 2, 2, 2]];
        assert!(matches!(
            memory.write_4bytes_batch(0, &rows),
            Err(MemoryError::OversizedCell { len: 5 })
        ));
        assert_eq!(memory.read_4bytes(0).unwrap(), [0; 4]);
    }

    #[test]
    fn test_batch_bounds() {
        let mut memory = SimpleMemory::new(4);
        assert!(memory.write_int32_batch(2, &[1, 2]).is_ok());
        assert!(matches!(
            memory.write_int32_batch(3, &[1, 2]),
            Err(MemoryError::OutOfBounds {
                index: 3,
                span: 2,
                cell_count: 4
            })
        ));
        // Nothing written on failure
        assert_eq!(memory.read_int32(3).unwrap(), 2);

        assert!(memory.read_int32_copy(0, 5).is_err());
        assert!(memory.read_uint32_view(1, 4).is_err());
        assert!(memory.read_4bytes_view(4, 1).is_err());
        assert!(memory.read_boolean_copy(usize::MAX, 2).is_err());

        // Empty runs at the end of the data region are fine
        assert!(memory.read_int32_copy(4, 0).unwrap().is_empty());
        assert!(memory.write_uint32_batch(4, &[]).is_ok());
    }

    proptest! {
        #[test]
        fn batch_write_equals_sequential_writes(
            start in 0usize..8,
            values in prop::collection::vec(any::<i32>(), 0..8)
        ) {
            let mut batched = SimpleMemory::new(16);
            let mut sequential = SimpleMemory::new(16);

            prop_assert!(batched.write_int32_batch(start, &values).is_ok());
            for (offset, value) in values.iter().enumerate() {
                prop_assert!(sequential.write_int32(start + offset, *value).is_ok());
            }

            prop_assert_eq!(batched.as_bytes(), sequential.as_bytes());
            prop_assert_eq!(batched.read_int32_copy(start, values.len()).ok(), Some(values));
        }
    }
}
