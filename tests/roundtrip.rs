use differential_manchester::core::{read_flat, write_flat};
use differential_manchester::{
    decode, decode_span, decode_to_vec, encode, encode_span, encode_to_vec, CodingError, Symbol,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_words<W: Symbol>(rng: &mut StdRng, len: usize) -> Vec<W>
where
    rand::distributions::Standard: rand::distributions::Distribution<W>,
{
    (0..len).map(|_| rng.gen::<W>()).collect()
}

fn check_roundtrip<W: Symbol>()
where
    rand::distributions::Standard: rand::distributions::Distribution<W>,
{
    let mut rng = StdRng::seed_from_u64(0);
    for len in 0..64 {
        let data = random_words::<W>(&mut rng, len);

        let encoded = encode_to_vec(&data).unwrap();
        assert_eq!(encoded.len(), 2 * data.len());

        let decoded = decode_to_vec(&encoded).unwrap();
        assert_eq!(decoded, data);
    }
}

#[test]
fn test_roundtrip_all_widths() {
    check_roundtrip::<u8>();
    check_roundtrip::<u16>();
    check_roundtrip::<u32>();
    check_roundtrip::<u64>();
    check_roundtrip::<u128>();
}

#[test]
fn test_length_law() {
    let mut rng = StdRng::seed_from_u64(1);
    let line = random_words::<u32>(&mut rng, 10);

    let mut data = vec![0u32; 5];
    let coded = decode(&line, &mut data).unwrap();
    assert_eq!(coded.bits_written * 2, coded.bits_read);
    assert_eq!(coded.bits_read, 10 * 32);

    let mut line = vec![0u32; 10];
    let coded = encode(&data, &mut line).unwrap();
    assert_eq!(coded.bits_written, 2 * coded.bits_read);
}

#[test]
fn test_every_encoded_symbol_starts_at_previous_level() {
    let mut rng = StdRng::seed_from_u64(2);
    let data = random_words::<u16>(&mut rng, 8);
    let line = encode_to_vec(&data).unwrap();

    let mut level = false;
    for k in 0..data.len() * 16 {
        let first = read_flat(&line, 2 * k);
        let second = read_flat(&line, 2 * k + 1);
        assert_eq!(first, level);
        assert_eq!(first != second, read_flat(&data, k));
        level = second;
    }
}

/// Copy `bits` flat bits of `src` into a fresh buffer starting at `shift`
fn shifted<W: Symbol>(src: &[W], bits: usize, shift: usize) -> Vec<W> {
    let words = (bits + shift).div_ceil(W::BITS);
    let mut out = vec![W::zero(); words];
    for i in 0..bits {
        write_flat(&mut out, i + shift, read_flat(src, i));
    }
    out
}

#[test]
fn test_misaligned_streams_decode_identically() {
    let mut rng = StdRng::seed_from_u64(3);
    for len in 1..16 {
        let line = random_words::<u8>(&mut rng, len);
        let bits = len * 8;
        let expected = decode_to_vec(&line).unwrap();

        for shift in 1..8 {
            let moved = shifted(&line, bits, shift);
            let mut out = vec![0u8; expected.len()];
            decode_span(&moved, shift, bits, &mut out).unwrap();
            assert_eq!(out, expected, "len {} shift {}", len, shift);
        }
    }
}

#[test]
fn test_misaligned_encode_matches_aligned() {
    let mut rng = StdRng::seed_from_u64(4);
    let data = random_words::<u64>(&mut rng, 3);
    let expected = encode_to_vec(&data).unwrap();

    let moved = shifted(&data, 3 * 64, 37);
    let mut out = vec![0u64; expected.len()];
    encode_span(&moved, 37, 3 * 64, &mut out).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn test_capacity_violation_writes_nothing() {
    let mut rng = StdRng::seed_from_u64(5);
    let line = random_words::<u16>(&mut rng, 9);

    let mut out = vec![0xBEEFu16; 4];
    let err = decode(&line, &mut out).unwrap_err();
    assert_eq!(
        err,
        CodingError::InsufficientBuffer {
            required: 5,
            available: 4
        }
    );
    assert!(out.iter().all(|&w| w == 0xBEEF));
}

#[test]
fn test_concurrent_calls_on_disjoint_buffers() {
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            std::thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed);
                let data = random_words::<u32>(&mut rng, 256);
                let line = encode_to_vec(&data).unwrap();
                assert_eq!(decode_to_vec(&line).unwrap(), data);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
