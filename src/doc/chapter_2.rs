/*!
# Expressions

A line holds one expression, or an assignment `address ◈ value`, and may
start with `▭` to print its value as a character.

## Numbers

A run of `▀` and `▄` is a number. A single glyph is zero. Otherwise the
first glyph is the sign, `▄` for negative, and the rest are the bits
with `▀` as one.

```text
▀▀      1
▀▀▄▄▄   8
▄▀▄    -2
▀       0
```

## Operators

From loosest to tightest binding:

| Glyph     | Operation          |
|-----------|--------------------|
| `▓`       | or                 |
| `▒`       | exclusive or       |
| `░`       | and                |
| `▚` `▞`   | shift left, right  |
| `◇` `▔`   | memory read, not   |

`▕` and `▏` are parentheses. Operators of equal strength group to the
left. `◇` and `▔` apply to whatever follows them, so `◇◇▀▀` reads the
cell whose address is stored in cell 1.

Every cell of memory starts at zero. An assignment evaluates the value
first, then the address, stores the value and is worth the value.

```text
▀▀◈◇▀▄▒▀▀▀▄▄▄▄     cell 1 = cell 0 xor 48
```

Shifting by a negative amount, or shifting left past 64 bits, stops the
program.

*/
