error_chain! {
    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        UnknownSpecificity(name: String) {
            description("unknown specificity")
            display("unknown specificity {:?}", name)
        }

        InvalidPosition(position: isize, length: usize) {
            description("invalid bond position")
            display("invalid bond position {}; expected a value in 1..={}", position, length)
        }

        InvalidPattern(pattern: String, reason: String) {
            description("invalid specificity pattern")
            display("invalid pattern {:?}: {}", pattern, reason)
        }
    }
}
