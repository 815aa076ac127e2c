/*!
# Introductory Tutorial for BoxScript

A BoxScript program is a drawing. Code lives inside boxes drawn with
box-drawing characters, and the shape of the boxes is the control flow.
Everything inside a box is made of block glyphs: numbers are written in
binary with `▀` and `▄`, memory is read with `◇` and written with `◈`,
and `▭` at the start of a line prints a character.

Save the following as `zero.bs`.

```text
╔═══════════════╗
║ prints a zero ║
╚═══════════════╝
┌───────────┐
│▭▀▀▀▄▄▄▄   │
└───────────┘
```

Then run it.

<pre><code>&nbsp;$ boxscript zero.bs
&nbsp;0
</code></pre>

The double lined box is a comment. The single lined box holds one line
of code. The line starts with `▭`, so its value is printed as a
character. The value is `▀▀▀▄▄▄▄`: the first glyph is the sign (`▀` for
positive) and the rest are bits, `110000` in binary or 48, which is the
character `0`. Every run ends with a newline.

Programs that do not draw proper boxes are not run at all. Instead a
single line explains the first problem found, counting rows from zero.

<pre><code>&nbsp;$ boxscript broken.bs
&nbsp;Discontinuous box at line 4
</code></pre>

Start the executable without a file to draw programs interactively.
The editor maps plain keys to glyphs, so `q` types `│`, `e` types `┌`,
`(` and `)` type `▄` and `▀`. Every row you enter is appended to the
program. Lines starting with `:` are commands: `:run`, `:list`,
`:clear`, `:mem` and `:help`. Stop a running program with CTRL-C and
leave with CTRL-D.

Memory can be seeded from the command line with `--mem ADDRESS:VALUE`,
and `--list` prints a program in colour instead of running it.

*/
