/*!
# Boxes and Blocks

A box is the only kind of loop. Its left wall is split into blocks by
tee glyphs. Thin walls (`│`, `─`) draw exec blocks and heavy walls
(`┃`, `━`) draw if blocks. The corner or tee at the start of a block
decides what kind of block follows.

| Glyph | Ends            | Starts           |
|-------|-----------------|------------------|
| `┌`   |                 | box, exec block  |
| `┏`   |                 | box, if block    |
| `├`   | exec block      | exec block       |
| `┞` `┡` | if block      | exec block       |
| `┟` `┢` | exec block    | if block         |
| `┣`   | if block        | if block         |
| `└`   | exec block, box |                  |
| `┗`   | if block, box   |                  |

Each row inside a block is a line. The value of a block is the value of
its last line that has code in it.

A box without if blocks runs its blocks once. A box with at least one
if block runs its blocks in order and starts over after the last one.
It stops as soon as an if block has the value zero. This program counts
from `0` to `7`: the if block at the top compares memory cell 0 with 8.

```text
┏━━━━━━━━━━━━━━━━┓
┃◇▀▄▒▀▀▄▄▄       ┃
┡━━━━━━━━━━━━━━━━┩
│▀▀◈◇▀▄▒▀▀▀▄▄▄▄  │
│▀▀▄◈◇▀▄░▀▀▀▄▄▄▄ │
│┏━━━━━━━━━━━━━┓ │
│┃◇▀▀▄         ┃ │
│┡━━━━━━━━━━━━━┩ │
││▀▀▀◈◇▀▀▄▚▀▀  │ │
││▀▀▄◈◇▀▀░◇▀▀▀ │ │
││▀▀◈◇▀▀▒◇▀▀▀  │ │
│└─────────────┘ │
│▭◇▀▀            │
├────────────────┤
│▀▀◈◇▀▄░▀▀       │
│▀▄◈◇▀▄▒▀▀       │
│┏━━━━━━━━━━━━┓  │
│┃◇▀▀         ┃  │
│┡━━━━━━━━━━━━┩  │
││▀▀▄◈◇▀▀▚▀▀  │  │
││▀▀◈◇▀▄░◇▀▀▄ │  │
││▀▄◈◇▀▄▒◇▀▀▄ │  │
│└────────────┘  │
└────────────────┘
```

A box that never stops is stopped after a fixed number of steps
(`--cycles`). This ends the program quietly, as does printing a
negative number or a value that is not a character.

## Comments

`╔═══╗`, `╚═══╝` and `╠═══╣` rules and everything between two `║` on a
row are comments. Comments may hold any text.

*/
