//! End-to-end usage of the memory the way callers drive it.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use simple_memory::{MemoryError, SimpleMemory, ensure_batch_len};
use std::thread;

#[test]
fn single_value_round_trip() {
    let mut memory = SimpleMemory::new(2);
    memory.write_int32(0, 42).unwrap();
    assert_eq!(memory.read_int32(0).unwrap(), 42);
}

#[test]
fn thirteen_values_round_trip() {
    let values: Vec<u32> = (0..13).map(|i| 0x9E37_79B9_u32.wrapping_mul(i + 1)).collect();

    let mut memory = SimpleMemory::new(26);
    for (index, value) in values.iter().enumerate() {
        memory.write_uint32(index, *value).unwrap();
    }

    assert_eq!(memory.read_uint32_copy(0, 13).unwrap(), values);
    if cfg!(target_endian = "little") {
        assert_eq!(memory.read_uint32_view(0, 13).unwrap(), values.as_slice());
    }
}

#[test]
fn bounds_for_two_cells() {
    let mut memory = SimpleMemory::new(2);
    assert!(memory.write_int32(0, 1).is_ok());
    assert!(memory.write_int32(1, 1).is_ok());

    for index in [2, 3, 100] {
        let err = memory.write_int32(index, 1).unwrap_err();
        assert!(matches!(err, MemoryError::OutOfBounds { .. }), "{err}");
        assert!(memory.read_int32(index).is_err());
        assert!(memory.read_boolean(index).is_err());
    }
}

#[test]
fn transport_round_trip() {
    let mut memory = SimpleMemory::new(4);
    memory.write_member_id(3).unwrap();
    memory.write_int32_batch(0, &[5, 6, 7, 8]).unwrap();

    // Bytes travel to the device and come back with results in place
    let mut raw = memory.into_bytes();
    raw[12..16].copy_from_slice(&26_i32.to_le_bytes());

    let returned = SimpleMemory::from_bytes(&raw, Default::default()).unwrap();
    assert_eq!(returned.read_header().unwrap().member_id, 3);
    assert_eq!(returned.read_int32_copy(0, 4).unwrap(), vec![26, 6, 7, 8]);
}

#[test]
fn fan_out_uses_one_memory_per_worker() {
    const WORKERS: usize = 4;
    let inputs: Vec<i32> = vec![10, 20, 30, 40];
    ensure_batch_len(WORKERS, inputs.len()).unwrap();

    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| {
            let mut memory = SimpleMemory::new(2);
            memory.write_int32(0, input).unwrap();
            thread::spawn(move || {
                let value = memory.read_int32(0).unwrap();
                memory.write_int32(1, value * 2).unwrap();
                memory
            })
        })
        .collect();

    let outputs: Vec<i32> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().read_int32(1).unwrap())
        .collect();
    assert_eq!(outputs, vec![20, 40, 60, 80]);
}

#[test]
fn batch_length_checked_before_any_work() {
    let inputs = [1, 2, 3];
    let err = ensure_batch_len(4, inputs.len()).unwrap_err();
    assert!(matches!(
        err,
        MemoryError::LengthMismatch {
            expected: 4,
            actual: 3
        }
    ));
}
