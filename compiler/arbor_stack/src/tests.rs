use super::*;

/// Minimal owned chain with the same shape as a unary-operator spine.
enum Chain {
    End,
    Link(Box<Chain>),
}

fn build_chain(len: usize) -> Chain {
    let mut chain = Chain::End;
    for _ in 0..len {
        chain = Chain::Link(Box::new(chain));
    }
    chain
}

fn chain_len(chain: &Chain) -> usize {
    ensure_sufficient_stack(|| match chain {
        Chain::End => 0,
        Chain::Link(next) => chain_len(next) + 1,
    })
}

fn dismantle(chain: Chain) {
    // Iterative teardown so the test itself cannot overflow on drop.
    let mut current = chain;
    while let Chain::Link(next) = current {
        current = *next;
    }
}

#[test]
fn test_passes_through_closure_result() {
    assert_eq!(ensure_sufficient_stack(|| 7 * 6), 42);
}

#[test]
fn test_passes_through_result_type() {
    let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("boom"));
    assert_eq!(result, Err("boom"));
}

#[test]
fn test_shallow_chain() {
    let chain = build_chain(16);
    assert_eq!(chain_len(&chain), 16);
    dismantle(chain);
}

#[test]
fn test_deep_chain_does_not_overflow() {
    // Deep enough to overflow an 8MB stack without segment growth.
    let chain = build_chain(200_000);
    assert_eq!(chain_len(&chain), 200_000);
    dismantle(chain);
}

#[test]
#[cfg(not(target_arch = "wasm32"))]
fn test_remaining_stack_reported_on_native() {
    assert!(remaining_stack().is_some_and(|bytes| bytes > 0));
}
