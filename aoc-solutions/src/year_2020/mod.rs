aoc_harness::solutions! {
    year = 2020;
    day_01 = 1,
}
