//! Cross-crate scenarios from the kernel level: the full entropy-to-address
//! pipeline against a published vector, and two bounded searches exercising
//! `SearchDriver`'s early-exit coordination end to end.

use vaddr_kernel::{derive_address, Condition, SearchConfig, SearchDriver};

fn test_wordlist() -> [&'static str; 2048] {
    core::array::from_fn(|i| match i {
        0 => "abandon",
        102 => "about",
        _ => "zzz",
    })
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[test]
fn zero_entropy_derives_the_published_test_address() {
    let wordlist = test_wordlist();
    let address = derive_address(&[0u8; 32], &wordlist);
    assert_eq!(hex(&address), "9858effd232b4033e47d90003d41ec34ecaeda94");
}

#[test]
fn bounded_prefix_search_terminates_with_a_matching_address() {
    let wordlist = test_wordlist();
    let condition = Condition::encode_prefix(&[0x00]).unwrap();
    let config = SearchConfig::new([0u8; 32], 1024, condition, 2048, [0; 20], [0; 20]).unwrap();
    let driver = SearchDriver::new(&config, &wordlist).unwrap();
    driver.run();

    let result = driver.result().expect("a single zero prefix byte should be found quickly");
    assert_eq!(result.found, 1);
    assert_eq!(result.eth_address[0], 0x00);

    let verified = derive_address(&result.result_entropy, &wordlist);
    assert_eq!(verified, result.eth_address);
}

#[test]
fn bounded_leading_zeros_exact_search_terminates_with_a_matching_address() {
    let wordlist = test_wordlist();
    let condition = Condition::encode_leading_zeros_exact(4);
    let config = SearchConfig::new([0u8; 32], 1024, condition, 2048, [0; 20], [0; 20]).unwrap();
    let driver = SearchDriver::new(&config, &wordlist).unwrap();
    driver.run();

    let result = driver.result().expect("a 4-nibble leading-zero run should be found quickly");
    assert_eq!(result.found, 1);
    assert_eq!(vaddr_kernel::condition::leading_zero_nibbles(&result.eth_address), 4);

    let verified = derive_address(&result.result_entropy, &wordlist);
    assert_eq!(verified, result.eth_address);
}
