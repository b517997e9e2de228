//! Manifest fixtures shared by the scanner and parser tests.
//!
//! The manifests follow the `3d-graphics-examples` package: a handful of
//! scalar fields, multi-line copyright and description text, two source
//! repositories and two executables.

use crate::parser::token::Token;

use super::{key, scope, value};

/// Only top-level scalar fields.
pub const SCALAR_MANIFEST: &str = "\
Name:          3d-graphics-examples
Version:       0.0.0.2
Cabal-Version: >= 1.8
Build-Type:    Simple
License:       BSD3
License-File:  LICENSE
";

/// Every supported construct: scalars, multi-line text and both stanza kinds.
pub const FULL_MANIFEST: &str = "\
Name:          3d-graphics-examples
Version:       0.0.0.2
Cabal-Version: >= 1.8
Build-Type:    Simple
License:       BSD3
License-File:  LICENSE
Copyright:     © 2006      Matthias Reisner;
               © 2012–2015 Wolfgang Jeltsch
Author:        Matthias Reisner
Maintainer:    wolfgang@cs.ioc.ee
Stability:     provisional
Homepage:      http://darcs.wolfgang.jeltsch.info/haskell/3d-graphics-examples
Package-URL:   http://hackage.haskell.org/packages/archive/3d-graphics-examples/0.0.0.2/3d-graphics-examples-0.0.0.2.tar.gz
Synopsis:      Examples of 3D graphics programming with OpenGL
Description:   This package demonstrates how to program simple interactive 3D
               graphics with OpenGL. It contains two programs, which are both
               about fractals:
               .
               [L-systems] generates graphics from Lindenmayer systems
               (L-systems). It defines a language for L-systems as an embedded
               DSL.
               .
               [Mountains] uses the generalized Brownian motion to generate
               graphics that resemble mountain landscapes.
Category:      Graphics, Fractals
Tested-With:   GHC == 8.0.1

Source-Repository head
    Type:     darcs
    Location: http://darcs.wolfgang.jeltsch.info/haskell/3d-graphics-examples/main

Source-Repository this
    Type:     darcs
    Location: http://darcs.wolfgang.jeltsch.info/haskell/3d-graphics-examples/main
    Tag:      3d-graphics-examples-0.0.0.2

Executable mountains
    Build-Depends:  base   >= 3.0 && < 5,
                    GLUT   >= 2.4 && < 2.8,
                    OpenGL >= 2.8 && < 3.1,
                    random >= 1.0 && < 1.2
    Extensions:     FlexibleContexts
    Main-Is:        Mountains.hs
    Other-Modules:  Utilities
    HS-Source-Dirs: src src/mountains

Executable l-systems
    Build-Depends:  base   >= 3.0 && < 5,
                    GLUT   >= 2.4 && < 2.8,
                    OpenGL >= 2.8 && < 3.1
    Extensions:     FlexibleContexts
    Main-Is:        LSystems.hs
    Other-Modules:  Utilities
                    ConiferLSystem
                    IslandLSystem
                    KochLSystem
                    LSystem
                    TreeLSystem
                    Turtle
    HS-Source-Dirs: src src/l-systems
";

/// A library-only manifest using leading-comma dependency lists.
pub const LIBRARY_MANIFEST: &str = "\
name:          text-utils
version:       1.2.0
cabal-version: >= 1.10

library
  exposed-modules:  Data.Text.Utils
  build-depends:
      base >= 4.9 && < 5
    , text == 1.2.3
    , containers
  hs-source-dirs:   src
  default-language: Haskell2010
";

const HOMEPAGE: &str = "http://darcs.wolfgang.jeltsch.info/haskell/3d-graphics-examples";
const REPOSITORY: &str = "http://darcs.wolfgang.jeltsch.info/haskell/3d-graphics-examples/main";
const PACKAGE_URL: &str = "http://hackage.haskell.org/packages/archive/3d-graphics-examples/0.0.0.2/3d-graphics-examples-0.0.0.2.tar.gz";

/// Description lines of [`FULL_MANIFEST`].
pub const DESCRIPTION: &[&str] = &[
    "This package demonstrates how to program simple interactive 3D",
    "graphics with OpenGL. It contains two programs, which are both",
    "about fractals:",
    ".",
    "[L-systems] generates graphics from Lindenmayer systems",
    "(L-systems). It defines a language for L-systems as an embedded",
    "DSL.",
    ".",
    "[Mountains] uses the generalized Brownian motion to generate",
    "graphics that resemble mountain landscapes.",
];

/// The token sequence [`FULL_MANIFEST`] scans to.
pub fn full_manifest_tokens() -> Vec<Token> {
    let mut tokens = vec![
        key("Name"),
        value("3d-graphics-examples"),
        key("Version"),
        value("0.0.0.2"),
        key("Cabal-Version"),
        value(">= 1.8"),
        key("Build-Type"),
        value("Simple"),
        key("License"),
        value("BSD3"),
        key("License-File"),
        value("LICENSE"),
        key("Copyright"),
        value("© 2006      Matthias Reisner;"),
        value("© 2012–2015 Wolfgang Jeltsch"),
        key("Author"),
        value("Matthias Reisner"),
        key("Maintainer"),
        value("wolfgang@cs.ioc.ee"),
        key("Stability"),
        value("provisional"),
        key("Homepage"),
        value(HOMEPAGE),
        key("Package-URL"),
        value(PACKAGE_URL),
        key("Synopsis"),
        value("Examples of 3D graphics programming with OpenGL"),
        key("Description"),
    ];
    tokens.extend(DESCRIPTION.iter().map(|line| value(*line)));
    tokens.extend([
        key("Category"),
        value("Graphics, Fractals"),
        key("Tested-With"),
        value("GHC == 8.0.1"),
        key("Source-Repository"),
        scope("head"),
        key("Type"),
        value("darcs"),
        key("Location"),
        value(REPOSITORY),
        key("Source-Repository"),
        scope("this"),
        key("Type"),
        value("darcs"),
        key("Location"),
        value(REPOSITORY),
        key("Tag"),
        value("3d-graphics-examples-0.0.0.2"),
        key("Executable"),
        scope("mountains"),
        key("Build-Depends"),
        value("base   >= 3.0 && < 5"),
        value("GLUT   >= 2.4 && < 2.8"),
        value("OpenGL >= 2.8 && < 3.1"),
        value("random >= 1.0 && < 1.2"),
        key("Extensions"),
        value("FlexibleContexts"),
        key("Main-Is"),
        value("Mountains.hs"),
        key("Other-Modules"),
        value("Utilities"),
        key("HS-Source-Dirs"),
        value("src src/mountains"),
        key("Executable"),
        scope("l-systems"),
        key("Build-Depends"),
        value("base   >= 3.0 && < 5"),
        value("GLUT   >= 2.4 && < 2.8"),
        value("OpenGL >= 2.8 && < 3.1"),
        key("Extensions"),
        value("FlexibleContexts"),
        key("Main-Is"),
        value("LSystems.hs"),
        key("Other-Modules"),
        value("Utilities"),
        value("ConiferLSystem"),
        value("IslandLSystem"),
        value("KochLSystem"),
        value("LSystem"),
        value("TreeLSystem"),
        value("Turtle"),
        key("HS-Source-Dirs"),
        value("src src/l-systems"),
    ]);
    tokens
}

/// Repository location used by both `Source-Repository` stanzas.
pub fn repository_location() -> &'static str {
    REPOSITORY
}
