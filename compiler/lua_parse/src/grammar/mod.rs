//! Grammar productions, split by syntactic category.

mod expression;
mod statement;
