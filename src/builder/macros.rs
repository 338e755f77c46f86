//! Macros for ergonomic transition tables.

/// Build a `Vec` of transitions from `from, symbol => to` rows.
///
/// Endpoints go through `Into`, so string literals work for `String` states.
///
/// # Example
///
/// ```
/// use dfa_engine::core::Transition;
/// use dfa_engine::transitions;
///
/// let table: Vec<Transition<String, char>> = transitions![
///     "S0", '0' => "S0";
///     "S0", '1' => "S1";
///     "S1", '0' => "S2";
/// ];
///
/// assert_eq!(table.len(), 3);
/// assert_eq!(table[1].to_string(), "S0 --[1]--> S1");
/// ```
#[macro_export]
macro_rules! transitions {
    () => {
        ::std::vec::Vec::new()
    };
    (
        $( $from:expr, $symbol:expr => $to:expr );+ $(;)?
    ) => {
        ::std::vec![
            $( $crate::core::Transition::new($from, $to, $symbol) ),+
        ]
    };
}
