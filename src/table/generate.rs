use crate::path::{encode_component, encode_query};
use crate::pattern::PatternToken;
use crate::router::{RouterError, RouterResult};
use crate::table::RouteTable;
use crate::types::RouteParams;

impl<V> RouteTable<V> {
    pub fn generate_url<K, Q>(
        &self,
        name: &str,
        params: &RouteParams,
        query: &[(K, Q)],
    ) -> RouterResult<String>
    where
        K: AsRef<str>,
        Q: AsRef<str>,
    {
        let route = self.get(name).ok_or_else(|| RouterError::UnknownRoute {
            name: name.to_string(),
        })?;

        if route.is_wildcard() {
            return Err(RouterError::NotGeneratable {
                name: name.to_string(),
            });
        }

        let mut url = String::new();
        for token in route.ast().tokens() {
            match token {
                PatternToken::Literal(text) => {
                    url.push('/');
                    url.push_str(text);
                }
                PatternToken::Parameter(param) => {
                    let value =
                        params
                            .get(&param.name)
                            .ok_or_else(|| RouterError::MissingParameter {
                                name: param.name.clone(),
                                route: name.to_string(),
                            })?;
                    url.push('/');
                    url.push_str(&encode_component(value));
                }
                PatternToken::Slash => url.push('/'),
            }
        }

        if !query.is_empty() {
            url.push('?');
            url.push_str(&encode_query(query));
        }

        Ok(url)
    }
}
