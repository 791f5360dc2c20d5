use crate::logger::Logger;
use hyper::{
    body::HttpBody,
    service::{make_service_fn, service_fn},
    Body, Method, Request, Response, StatusCode,
};
use regex::Regex;
use std::{collections::HashMap, convert::Infallible, future::Future, net::SocketAddr, pin::Pin, sync::Arc};

/// URI template such as `/encode/{uuid}`; a `{name}` segment matches any single path segment.
pub struct DynamicUri {
    regex: Regex,
    escape: Regex,
    parameters: HashMap<String, usize>,
}

impl DynamicUri {
    pub fn new(uri: &str) -> Self {
        let mut parameters = HashMap::new();
        let segments: Vec<String> = uri
            .split('/')
            .map(|segment| match segment.strip_prefix('{').and_then(|name| name.strip_suffix('}')) {
                Some(name) => {
                    let index = parameters.len() + 1;
                    let previous = parameters.insert(name.to_string(), index);
                    assert!(previous.is_none(), "duplicate parameter {} in {}", name, uri);
                    "([^/]*)".to_string()
                }
                None => regex::escape(segment),
            })
            .collect();
        let regex = Regex::new(&format!("^{}$", segments.join("/"))).unwrap();
        let escape = Regex::new("%[0-9A-Fa-f]{2}").unwrap();
        Self { regex, escape, parameters }
    }

    /// Decodes `%XX` escapes. Returns `None` for malformed escapes or non UTF-8 results.
    pub fn decode(&self, value: &str) -> Option<String> {
        if value.matches('%').count() != self.escape.find_iter(value).count() {
            return None;
        }
        urlencoding::decode(value).ok().map(|value| value.into_owned())
    }

    pub fn check(&self, uri: &str) -> Option<HashMap<String, String>> {
        let captures = self.regex.captures(uri)?;
        let mut parameters = HashMap::new();
        for (name, &index) in &self.parameters {
            parameters.insert(name.clone(), self.decode(&captures[index])?);
        }
        Some(parameters)
    }
}

type BoxedResponseFuture = Pin<Box<dyn Send + Future<Output = Response<Body>>>>;
type BoxedHandler<S> = Box<dyn Fn(Request<Body>, HashMap<String, String>, Vec<u8>, Arc<S>) -> BoxedResponseFuture + Send + Sync>;

struct Route<S> {
    method: Method,
    dynamic_uri: DynamicUri,
    handler: BoxedHandler<S>,
}

impl<S> Route<S> {
    fn new(method: Method, uri: &str, handler: BoxedHandler<S>) -> Self {
        Self {
            method,
            dynamic_uri: DynamicUri::new(uri),
            handler,
        }
    }

    fn check(&self, request: &Request<Body>) -> Option<HashMap<String, String>> {
        if request.method() == self.method {
            self.dynamic_uri.check(request.uri().path())
        } else {
            None
        }
    }
}

pub struct Router<S> {
    routes: Vec<Route<S>>,
    state: Arc<S>,
    logger: Logger,
}

impl<S> Router<S> {
    pub fn new(state: Arc<S>, logger: Logger) -> Self {
        Self {
            routes: Vec::new(),
            state,
            logger,
        }
    }

    fn add<H, F>(&mut self, method: Method, uri: &str, handler: H)
    where
        H: 'static + Fn(Request<Body>, HashMap<String, String>, Vec<u8>, Arc<S>) -> F + Send + Sync,
        F: 'static + Future<Output = Response<Body>> + Send,
    {
        self.routes.push(Route::new(
            method,
            uri,
            Box::new(move |request, parameters, body, state| Box::pin(handler(request, parameters, body, state))),
        ));
    }

    pub async fn route(&self, request: Request<Body>, body: Vec<u8>) -> Response<Body> {
        self.logger.log(format!("{} {}", request.method(), request.uri()));
        for route in &self.routes {
            if let Some(parameters) = route.check(&request) {
                return (route.handler)(request, parameters, body, self.state.clone()).await;
            }
        }
        let mut response = Response::new(Body::from("Not Found"));
        *response.status_mut() = StatusCode::NOT_FOUND;
        response
    }
}

pub struct Server<S> {
    router: Router<S>,
}

impl<S: 'static + Send + Sync> Server<S> {
    pub fn new(state: Arc<S>, logger: Logger) -> Self {
        Self {
            router: Router::new(state, logger),
        }
    }

    pub fn get<H, F>(&mut self, uri: &str, handler: H)
    where
        H: 'static + Fn(Request<Body>, HashMap<String, String>, Vec<u8>, Arc<S>) -> F + Send + Sync,
        F: 'static + Future<Output = Response<Body>> + Send,
    {
        self.router.add(Method::GET, uri, handler);
    }

    pub fn post<H, F>(&mut self, uri: &str, handler: H)
    where
        H: 'static + Fn(Request<Body>, HashMap<String, String>, Vec<u8>, Arc<S>) -> F + Send + Sync,
        F: 'static + Future<Output = Response<Body>> + Send,
    {
        self.router.add(Method::POST, uri, handler);
    }

    /// Routes a single request without going through the network.
    pub async fn handle(&self, request: Request<Body>, body: Vec<u8>) -> Response<Body> {
        self.router.route(request, body).await
    }

    pub async fn run(self, address: SocketAddr) -> Result<(), hyper::Error> {
        let router = Arc::new(self.router);
        let make_service = make_service_fn(|_| {
            let router = router.clone();
            async {
                Ok::<_, Infallible>(service_fn(move |mut request: Request<Body>| {
                    let router = router.clone();
                    async move {
                        let mut body: Vec<u8> = Vec::new();
                        while let Some(chunk) = request.body_mut().data().await {
                            body.extend_from_slice(&chunk?);
                        }
                        Ok::<_, hyper::Error>(router.route(request, body).await)
                    }
                }))
            }
        });
        hyper::Server::try_bind(&address)?.serve(make_service).await
    }
}
