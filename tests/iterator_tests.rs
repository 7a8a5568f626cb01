use pullstream::{MemoryReader, ValuesExt};

fn sixteen_bytes() -> Vec<u8> {
    (0u8..16).collect()
}

#[test]
fn test_values_as_u8() {
    let data = sixteen_bytes();
    let mut stream = MemoryReader::new(&data);

    let values: Vec<u8> = stream.values::<u8>().collect();
    assert_eq!(values, (0u8..16).collect::<Vec<_>>());
}

#[test]
fn test_values_as_u16() {
    let data = sixteen_bytes();
    let mut stream = MemoryReader::new(&data);

    let values: Vec<u16> = stream.values::<u16>().collect();
    let expected: Vec<u16> = data
        .chunks(2)
        .map(|c| u16::from_ne_bytes([c[0], c[1]]))
        .collect();
    assert_eq!(values, expected);
}

#[test]
fn test_values_as_u32() {
    let data = sixteen_bytes();
    let mut stream = MemoryReader::new(&data);

    let values: Vec<u32> = stream.values::<u32>().collect();
    let expected: Vec<u32> = data
        .chunks(4)
        .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    assert_eq!(values, expected);
}

#[cfg(target_endian = "little")]
#[test]
fn test_values_little_endian_layout() {
    let data = sixteen_bytes();
    let mut stream = MemoryReader::new(&data);
    let words: Vec<u16> = stream.values::<u16>().collect();
    assert_eq!(
        words,
        vec![0x0100, 0x0302, 0x0504, 0x0706, 0x0908, 0x0b0a, 0x0d0c, 0x0f0e]
    );
}

#[test]
fn test_iterator_end_is_fused() {
    let data = [1u8, 2];
    let mut stream = MemoryReader::new(&data);

    let mut iter = stream.values::<u8>();
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
    assert!(iter.error().is_none());
    assert!(iter.into_result().is_ok());
}

#[test]
fn test_iterator_stops_on_trailing_partial_value() {
    // Five bytes only yield one u32; the dangling byte ends iteration.
    let data = [0u8, 0, 0, 0, 0xff];
    let mut stream = MemoryReader::new(&data);

    let values: Vec<u32> = stream.values::<u32>().collect();
    assert_eq!(values, vec![0]);
}

#[test]
fn test_iterator_works_with_sequence_algorithms() {
    let data = sixteen_bytes();
    let mut stream = MemoryReader::new(&data);

    let sum: u32 = stream.values::<u8>().map(u32::from).sum();
    assert_eq!(sum, (0u32..16).sum());
}

#[test]
fn test_iterator_over_empty_stream() {
    let mut stream = MemoryReader::new(&[]);
    assert_eq!(stream.values::<u8>().next(), None);
}
