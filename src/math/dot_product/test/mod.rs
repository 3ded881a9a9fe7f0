use super::dot_product_exact;

#[test]
fn test_basic() {
    let a = [1, 2, 3, 4];
    let b = [5, 6, 7, 8];
    // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
    assert_eq!(dot_product_exact(&a, &b), 70);
}

#[test]
fn test_empty() {
    let a: [u64; 0] = [];
    let b: [u64; 0] = [];
    assert_eq!(dot_product_exact(&a, &b), 0);
}

#[test]
fn test_single() {
    assert_eq!(dot_product_exact(&[3], &[4]), 12);
}

#[test]
fn test_widest_elements_do_not_overflow() {
    let max = u32::MAX as u64;
    let a = vec![max; 1024];
    let b = vec![max; 1024];
    let expected = (max as u128) * (max as u128) * 1024;
    assert_eq!(dot_product_exact(&a, &b), expected);
    assert!(expected > u64::MAX as u128);
}

#[test]
#[should_panic(expected = "Vectors must have the same length")]
fn test_length_mismatch_panics() {
    dot_product_exact(&[1, 2], &[1]);
}
