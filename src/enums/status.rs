/// Enum with the HTTP status codes the reason-phrase table knows about
///
/// Handlers usually return plain numeric codes, this enum is used to look
/// up a reason phrase when the status line is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    //  1xx status codes
    Continue,                            // 100
    SwitchingProtocols,                  // 101
    Processing,                          // 102
    EarlyHints,                          // 103
    //  2xx status codes
    Ok,                                  // 200
    Created,                             // 201
    Accepted,                            // 202
    NonAuthoritativeInformation,         // 203
    NoContent,                           // 204
    ResetContent,                        // 205
    PartialContent,                      // 206
    MultiStatus,                         // 207
    AlreadyReported,                     // 208
    ImUsed,                              // 226
    //  3xx status codes
    MultipleChoices,                     // 300
    MovedPermanently,                    // 301
    Found,                               // 302
    SeeOther,                            // 303
    NotModified,                         // 304
    UseProxy,                            // 305
    TemporaryRedirect,                   // 307
    PermanentRedirect,                   // 308
    //  4xx status codes
    BadRequest,                          // 400
    Unauthorized,                        // 401
    PaymentRequired,                     // 402
    Forbidden,                           // 403
    NotFound,                            // 404
    MethodNotAllowed,                    // 405
    NotAcceptable,                       // 406
    ProxyAuthenticationRequired,         // 407
    RequestTimeout,                      // 408
    Conflict,                            // 409
    Gone,                                // 410
    LengthRequired,                      // 411
    PreconditionFailed,                  // 412
    PayloadTooLarge,                     // 413
    UriTooLong,                          // 414
    UnsupportedMediaType,                // 415
    RangeNotSatisfiable,                 // 416
    ExpectationFailed,                   // 417
    MisdirectedRequest,                  // 421
    UnprocessableEntity,                 // 422
    Locked,                              // 423
    FailedDependency,                    // 424
    TooEarly,                            // 425
    UpgradeRequired,                     // 426
    PreconditionRequired,                // 428
    TooManyRequests,                     // 429
    RequestHeaderFieldsTooLarge,         // 431
    UnavailableForLegalReasons,          // 451
    //  5xx status codes
    InternalServerError,                 // 500
    NotImplemented,                      // 501
    BadGateway,                          // 502
    ServiceUnavailable,                  // 503
    GatewayTimeout,                      // 504
    VersionNotSupported,                 // 505
    VariantAlsoNegotiates,               // 506
    InsufficientStorage,                 // 507
    LoopDetected,                        // 508
    NotExtended,                         // 510
    NetworkAuthenticationRequired,       // 511
}

impl Status {
    /// Returns a known status for the numeric code
    pub fn from(code: u16) -> Option<Status> {
        use self::Status::*;
        let s = match code {
            //  1xx status codes
            100 => Continue,
            101 => SwitchingProtocols,
            102 => Processing,
            103 => EarlyHints,
            //  2xx status codes
            200 => Ok,
            201 => Created,
            202 => Accepted,
            203 => NonAuthoritativeInformation,
            204 => NoContent,
            205 => ResetContent,
            206 => PartialContent,
            207 => MultiStatus,
            208 => AlreadyReported,
            226 => ImUsed,
            //  3xx status codes
            300 => MultipleChoices,
            301 => MovedPermanently,
            302 => Found,
            303 => SeeOther,
            304 => NotModified,
            305 => UseProxy,
            307 => TemporaryRedirect,
            308 => PermanentRedirect,
            //  4xx status codes
            400 => BadRequest,
            401 => Unauthorized,
            402 => PaymentRequired,
            403 => Forbidden,
            404 => NotFound,
            405 => MethodNotAllowed,
            406 => NotAcceptable,
            407 => ProxyAuthenticationRequired,
            408 => RequestTimeout,
            409 => Conflict,
            410 => Gone,
            411 => LengthRequired,
            412 => PreconditionFailed,
            413 => PayloadTooLarge,
            414 => UriTooLong,
            415 => UnsupportedMediaType,
            416 => RangeNotSatisfiable,
            417 => ExpectationFailed,
            421 => MisdirectedRequest,
            422 => UnprocessableEntity,
            423 => Locked,
            424 => FailedDependency,
            425 => TooEarly,
            426 => UpgradeRequired,
            428 => PreconditionRequired,
            429 => TooManyRequests,
            431 => RequestHeaderFieldsTooLarge,
            451 => UnavailableForLegalReasons,
            //  5xx status codes
            500 => InternalServerError,
            501 => NotImplemented,
            502 => BadGateway,
            503 => ServiceUnavailable,
            504 => GatewayTimeout,
            505 => VersionNotSupported,
            506 => VariantAlsoNegotiates,
            507 => InsufficientStorage,
            508 => LoopDetected,
            510 => NotExtended,
            511 => NetworkAuthenticationRequired,
            _ => return None,
        };
        Some(s)
    }

    /// Numeric status code
    pub fn code(&self) -> u16 {
        use self::Status::*;
        match *self {
            //  1xx status codes
            Continue                        => 100,
            SwitchingProtocols              => 101,
            Processing                      => 102,
            EarlyHints                      => 103,
            //  2xx status codes
            Ok                              => 200,
            Created                         => 201,
            Accepted                        => 202,
            NonAuthoritativeInformation     => 203,
            NoContent                       => 204,
            ResetContent                    => 205,
            PartialContent                  => 206,
            MultiStatus                     => 207,
            AlreadyReported                 => 208,
            ImUsed                          => 226,
            //  3xx status codes
            MultipleChoices                 => 300,
            MovedPermanently                => 301,
            Found                           => 302,
            SeeOther                        => 303,
            NotModified                     => 304,
            UseProxy                        => 305,
            TemporaryRedirect               => 307,
            PermanentRedirect               => 308,
            //  4xx status codes
            BadRequest                      => 400,
            Unauthorized                    => 401,
            PaymentRequired                 => 402,
            Forbidden                       => 403,
            NotFound                        => 404,
            MethodNotAllowed                => 405,
            NotAcceptable                   => 406,
            ProxyAuthenticationRequired     => 407,
            RequestTimeout                  => 408,
            Conflict                        => 409,
            Gone                            => 410,
            LengthRequired                  => 411,
            PreconditionFailed              => 412,
            PayloadTooLarge                 => 413,
            UriTooLong                      => 414,
            UnsupportedMediaType            => 415,
            RangeNotSatisfiable             => 416,
            ExpectationFailed               => 417,
            MisdirectedRequest              => 421,
            UnprocessableEntity             => 422,
            Locked                          => 423,
            FailedDependency                => 424,
            TooEarly                        => 425,
            UpgradeRequired                 => 426,
            PreconditionRequired            => 428,
            TooManyRequests                 => 429,
            RequestHeaderFieldsTooLarge     => 431,
            UnavailableForLegalReasons      => 451,
            //  5xx status codes
            InternalServerError             => 500,
            NotImplemented                  => 501,
            BadGateway                      => 502,
            ServiceUnavailable              => 503,
            GatewayTimeout                  => 504,
            VersionNotSupported             => 505,
            VariantAlsoNegotiates           => 506,
            InsufficientStorage             => 507,
            LoopDetected                    => 508,
            NotExtended                     => 510,
            NetworkAuthenticationRequired   => 511,
        }
    }

    /// Canonical reason phrase
    pub fn reason(&self) -> &'static str {
        use self::Status::*;
        match *self {
            //  1xx status codes
            Continue                        => "Continue",
            SwitchingProtocols              => "Switching Protocols",
            Processing                      => "Processing",
            EarlyHints                      => "Early Hints",
            //  2xx status codes
            Ok                              => "OK",
            Created                         => "Created",
            Accepted                        => "Accepted",
            NonAuthoritativeInformation     => "Non-Authoritative Information",
            NoContent                       => "No Content",
            ResetContent                    => "Reset Content",
            PartialContent                  => "Partial Content",
            MultiStatus                     => "Multi-Status",
            AlreadyReported                 => "Already Reported",
            ImUsed                          => "IM Used",
            //  3xx status codes
            MultipleChoices                 => "Multiple Choices",
            MovedPermanently                => "Moved Permanently",
            Found                           => "Found",
            SeeOther                        => "See Other",
            NotModified                     => "Not Modified",
            UseProxy                        => "Use Proxy",
            TemporaryRedirect               => "Temporary Redirect",
            PermanentRedirect               => "Permanent Redirect",
            //  4xx status codes
            BadRequest                      => "Bad Request",
            Unauthorized                    => "Unauthorized",
            PaymentRequired                 => "Payment Required",
            Forbidden                       => "Forbidden",
            NotFound                        => "Not Found",
            MethodNotAllowed                => "Method Not Allowed",
            NotAcceptable                   => "Not Acceptable",
            ProxyAuthenticationRequired     => "Proxy Authentication Required",
            RequestTimeout                  => "Request Timeout",
            Conflict                        => "Conflict",
            Gone                            => "Gone",
            LengthRequired                  => "Length Required",
            PreconditionFailed              => "Precondition Failed",
            PayloadTooLarge                 => "Payload Too Large",
            UriTooLong                      => "URI Too Long",
            UnsupportedMediaType            => "Unsupported Media Type",
            RangeNotSatisfiable             => "Range Not Satisfiable",
            ExpectationFailed               => "Expectation Failed",
            MisdirectedRequest              => "Misdirected Request",
            UnprocessableEntity             => "Unprocessable Entity",
            Locked                          => "Locked",
            FailedDependency                => "Failed Dependency",
            TooEarly                        => "Too Early",
            UpgradeRequired                 => "Upgrade Required",
            PreconditionRequired            => "Precondition Required",
            TooManyRequests                 => "Too Many Requests",
            RequestHeaderFieldsTooLarge     => "Request Header Fields Too Large",
            UnavailableForLegalReasons      => "Unavailable for Legal Reasons",
            //  5xx status codes
            InternalServerError             => "Internal Server Error",
            NotImplemented                  => "Not Implemented",
            BadGateway                      => "Bad Gateway",
            ServiceUnavailable              => "Service Unavailable",
            GatewayTimeout                  => "Gateway Timeout",
            VersionNotSupported             => "HTTP Version Not Supported",
            VariantAlsoNegotiates           => "Variant Also Negotiates",
            InsufficientStorage             => "Insufficient Storage",
            LoopDetected                    => "Loop Detected",
            NotExtended                     => "Not Extended",
            NetworkAuthenticationRequired   => "Network Authentication Required",
        }
    }
}

/// Reason phrase for a numeric code, empty string for unknown codes
pub fn reason_phrase(code: u16) -> &'static str {
    Status::from(code).map(|s| s.reason()).unwrap_or("")
}
