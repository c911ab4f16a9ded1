
pub const INSERTION_SORT_CUTOFF: usize = 16;
pub const GROUP_SIZE: usize = 5;
pub const BRUTE_FORCE_CUTOFF: usize = 3;

const _: () = {
    assert!(INSERTION_SORT_CUTOFF >= 1, "INSERTION_SORT_CUTOFF must be at least 1");
    assert!(GROUP_SIZE % 2 == 1, "GROUP_SIZE must be odd to have a unique median");
    assert!(GROUP_SIZE >= 5, "GROUP_SIZE below 5 loses the linear time bound");
    assert!(BRUTE_FORCE_CUTOFF >= 3, "BRUTE_FORCE_CUTOFF must leave at least one pair in each half");
};
