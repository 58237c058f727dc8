aoc_harness::solutions! {
    year = 2023;
    day_01 = 1,
    day_02 = 2,
    day_03 = 3,
    day_04 = 4,
    day_06 = 6,
    day_07 = 7,
    day_09 = 9,
}
