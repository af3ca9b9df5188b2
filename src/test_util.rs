// Shared assertion helpers for the combinator-style parsers, whose results
// are Result<(rest, output), Err<E>>.
#[allow(unused)]
pub fn assert_parses<F, I, T, E>(parser: F, input: I, expect: T)
where
    F: Fn(I) -> Result<(I, T), E>,
    T: PartialEq + std::fmt::Debug,
    I: std::fmt::Debug,
    E: std::fmt::Debug,
{
    let result = parser(input);
    assert!(result.is_ok(), "parse failed:\r\n{:#?}", result);
    let (_rest, output) = result.unwrap();
    assert_eq!(
        expect, output,
        "expected:\r\n({:?})\r\ngot:\r\n({:?})",
        expect, output
    );
}

#[allow(unused)]
pub fn assert_transforms<F, I, T>(transform: F, input: I, expect: T)
where
    F: Fn(I) -> T,
    T: PartialEq + std::fmt::Debug,
    I: std::fmt::Debug,
{
    let output = transform(input);
    assert_eq!(
        expect, output,
        "expected:\r\n({:?})\r\ngot:\r\n({:?})",
        expect, output
    );
}
