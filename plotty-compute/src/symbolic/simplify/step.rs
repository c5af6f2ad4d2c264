/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `a+(b+c) = a+b+c`
    /// `a*(b*c) = a*b*c`
    Flatten,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `1+2 = 3`
    /// `1/2+1/3 = 5/6`
    AddNumbers,

    /// `a+a = 2a`
    /// `2a+3a = 5a`
    CombineLikeTerms,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `2*3*a = 6a`
    /// `a*2 = 2a`
    /// `1*a = a`
    MultiplyNumbers,

    /// `a*a = a^2`
    /// `a^2*a^3 = a^5`
    CombineLikeFactors,

    /// `2(a+b) = 2a+2b`
    DistributiveProperty,

    /// `a^0 = 1`
    PowerZero,

    /// `0^a = 0`
    PowerZeroLeft,

    /// `1^a = 1`
    PowerOneLeft,

    /// `a^1 = a`
    PowerOne,

    /// `(a^b)^c = a^(b*c)`
    PowerPower,

    /// `(a*b)^c = a^c*b^c`
    DistributePower,

    /// `2^3 = 8`
    /// `2^-2 = 1/4`
    PowerNumbers,

    /// `sqrt(a) = a^(1/2)`
    Sqrt,

    /// `sin(0) = 0`, `log(E) = 1`, etc.
    SpecialValue,

    /// `sin(-a) = -sin(a)`
    OddFunction,

    /// `cos(-a) = cos(a)`
    EvenFunction,

    /// A piecewise expression whose guard is a number is replaced by the selected branch, and one
    /// whose branches are equal is replaced by that branch.
    Piecewise,
}
